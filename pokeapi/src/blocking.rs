//! A synchronous facade over [`crate::Session`].
//!
//! Every call blocks the current thread until the whole resolution, artwork
//! included, has finished. Do not use it from within an async runtime.
use crate::{Identifier, Pokemon, Result};

use std::io;
use std::sync::Arc;
use tokio::runtime;

#[derive(Debug, Clone)]
pub struct Session {
    session: crate::Session,
    runtime: Arc<runtime::Runtime>,
}

impl Session {
    /// Wraps `session` with a runtime of its own.
    ///
    /// # Panics
    ///
    /// Building the facade is fine anywhere, but resolving through it from
    /// within an async runtime panics, and so does dropping its last clone
    /// there.
    pub fn new(session: crate::Session) -> io::Result<Self> {
        let runtime = runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        Ok(Self {
            session,
            runtime: Arc::new(runtime),
        })
    }

    pub fn resolve_by_id(&self, id: i64) -> Result<Pokemon> {
        self.runtime.block_on(self.session.resolve_by_id(id))
    }

    pub fn resolve_by_name(&self, name: &str) -> Result<Pokemon> {
        self.runtime.block_on(self.session.resolve_by_name(name))
    }

    pub fn resolve(&self, identifier: &Identifier) -> Result<Pokemon> {
        self.runtime.block_on(self.session.resolve(identifier))
    }
}
