pub mod blocking;

mod config;
mod error;
mod session;

pub use pokeapi_core::{keys, pokemon, sprite};

pub use config::Config;
pub use error::{Error, Result};
pub use pokemon::Pokemon;
pub use session::{Identifier, Session};
pub use sprite::Sprite;
