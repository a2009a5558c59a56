use crate::pokemon;

use std::sync::Arc;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("id {0} is out of range ({min}..={max})", min = pokemon::Id::MIN, max = pokemon::Id::MAX)]
    OutOfRange(i64),
    #[error("request for {identifier:?} failed: {source}")]
    Network {
        identifier: String,
        source: Arc<reqwest::Error>,
    },
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] pokemon::Malformed),
}
