//! Artist feed client.
//!
//! Issues a single `GET /api/artists` against the configured backend and
//! turns the JSON array into an [`ArtistCatalog`]. There is no retry; a
//! failed fetch is reported to the caller.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info};

use crate::catalog::ArtistCatalog;
use crate::error::{FeedError, Result};
use crate::models::Artist;

/// Endpoint serving the artist list, relative to the base URL.
const ARTISTS_ENDPOINT: &str = "api/artists";

/// Default backend address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Connection settings for [`ArtistFeed`].
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Backend root, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Whole-request timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: concat!("artistfall/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl FeedConfig {
    /// Config pointing at `base_url` with default timeout and user agent.
    pub fn with_base_url<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Client for the artist list endpoint.
///
/// # Example
///
/// ```rust,no_run
/// use artistfall::{ArtistFeed, FeedConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let feed = ArtistFeed::new(FeedConfig::with_base_url("http://localhost:8000"))?;
///     let catalog = feed.fetch_artists().await?;
///     println!("{} artists", catalog.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ArtistFeed {
    client: Client,
    base_url: String,
}

impl ArtistFeed {
    /// Create a new feed client.
    pub fn new(config: FeedConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(FeedError::InvalidConfig("base URL is empty".to_string()));
        }

        let client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL of the artist list endpoint.
    pub fn artists_url(&self) -> String {
        format!("{}/{}", self.base_url, ARTISTS_ENDPOINT)
    }

    /// Fetch every artist once.
    pub async fn fetch_artists(&self) -> Result<ArtistCatalog> {
        let url = self.artists_url();
        debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!("Artist feed returned {} for {}", status, url);
            return Err(FeedError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let artists: Vec<Artist> = serde_json::from_str(&body).map_err(|e| {
            error!("Malformed artist list from {}: {}", url, e);
            e
        })?;

        info!("Loaded {} artists", artists.len());
        Ok(ArtistCatalog::new(artists))
    }
}
