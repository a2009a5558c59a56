use reqwest::Url;
use std::time::Duration;

/// Where and how a [`Session`](crate::Session) talks to the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// Root of the API, e.g. `https://pokeapi.co/api/v2`.
    pub base_url: Url,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Config {
    pub const DEFAULT_BASE_URL: &'static str = "https://pokeapi.co/api/v2";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            timeout: Self::DEFAULT_TIMEOUT,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Url::parse(Self::DEFAULT_BASE_URL).expect("Parse default base URL"))
    }
}
