use crate::pokemon::{self, Metadata};
use crate::{Config, Error, Pokemon, Result, Sprite};

use bytes::Bytes;
use futures_util::TryFutureExt;
use reqwest::Url;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tokio::task;

const RESOURCE: &str = "pokemon";

/// A connection to the service.
///
/// Cloning is cheap; clones share the same connection pool.
#[derive(Debug, Clone)]
pub struct Session {
    client: reqwest::Client,
    base_url: Url,
}

impl Session {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = reqwest::ClientBuilder::new()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        log::info!("Session started (base URL: {})", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url,
        })
    }

    /// Resolves a Pokémon by its national dex number.
    ///
    /// Ids outside of `Id::MIN..=Id::MAX` fail without touching the network.
    pub async fn resolve_by_id(&self, id: i64) -> Result<Pokemon> {
        let Some(id) = pokemon::Id::new(id) else {
            log::debug!("Rejected id {id}: out of range");

            return Err(Error::OutOfRange(id));
        };

        self.fetch(&id.to_string()).await
    }

    /// Resolves a Pokémon by its species name.
    ///
    /// The name is only normalized to lower case; whether it exists is up to
    /// the service.
    pub async fn resolve_by_name(&self, name: &str) -> Result<Pokemon> {
        self.fetch(&name.trim().to_lowercase()).await
    }

    pub async fn resolve(&self, identifier: &Identifier) -> Result<Pokemon> {
        match identifier {
            Identifier::Id(id) => self.resolve_by_id(*id).await,
            Identifier::Name(name) => self.resolve_by_name(name).await,
        }
    }

    async fn fetch(&self, identifier: &str) -> Result<Pokemon> {
        let url = self.resource_url(identifier);

        log::info!("Fetching metadata: {url}");
        let body = self
            .download(url)
            .await
            .map_err(|error| Error::Network {
                identifier: identifier.to_owned(),
                source: Arc::new(error),
            })?;

        log::debug!("Parsing metadata of {identifier:?} ({} bytes)", body.len());
        let metadata = Metadata::parse(&body)?;

        let sprite = match &metadata.artwork {
            Some(url) => self.fetch_sprite(url).await,
            None => {
                log::warn!("No official artwork found for {}", metadata.name);

                Sprite::empty()
            }
        };

        log::debug!("Resolved {} (#{})", metadata.name, metadata.id);

        Ok(Pokemon::new(metadata, sprite))
    }

    async fn fetch_sprite(&self, url: &str) -> Sprite {
        log::info!("Downloading artwork: {url}");

        // Decode in a background blocking thread
        let decode = |bytes: Bytes| async move {
            task::spawn_blocking(move || Sprite::decode(&bytes))
                .await?
                .map_err(Artwork::Decode)
        };

        self.download(url)
            .map_err(Artwork::Download)
            .and_then(decode)
            .await
            .unwrap_or_else(|error| {
                log::warn!("Failed to load official artwork: {error}");

                Sprite::empty()
            })
    }

    async fn download(&self, url: impl reqwest::IntoUrl) -> Result<Bytes, reqwest::Error> {
        let response = self.client.get(url).send().await?;

        response.error_for_status()?.bytes().await
    }

    fn resource_url(&self, identifier: &str) -> Url {
        let mut url = self.base_url.clone();

        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(RESOURCE).push(identifier);
        }

        url
    }
}

/// What to resolve: a dex number or a species name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    Id(i64),
    Name(String),
}

impl FromStr for Identifier {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Ok(s
            .parse()
            .map(Self::Id)
            .unwrap_or_else(|_| Self::Name(s.to_owned())))
    }
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum Artwork {
    #[error("download failed: {0}")]
    Download(reqwest::Error),
    #[error("decoding failed: {0}")]
    Decode(image::ImageError),
    #[error("decoder panicked: {0}")]
    Join(#[from] task::JoinError),
}
