//! PokeAPI Client
//!
//! Fetches PokeAPI resources through the shared cache. The cache is keyed by
//! request URL and holds raw response bodies; decoding happens on every read.

use tracing::{debug, info};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::PokeApiError;
use crate::pokeapi::LocationAreaPage;

/// HTTP client that memoizes response bodies in a [`Cache`].
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    cache: Cache,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client using the base URL and timeout from `config`.
    pub fn new(cache: Cache, config: &Config) -> Result<Self, PokeApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout_duration())
            .build()?;

        Ok(Self {
            http,
            cache,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the first page of the location-area listing.
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Fetches and decodes one page of location areas.
    pub async fn fetch_location_areas(&self, url: &str) -> Result<LocationAreaPage, PokeApiError> {
        let body = self.fetch_cached(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Returns the body for `url`, from the cache when present.
    ///
    /// Only successful responses are stored.
    async fn fetch_cached(&self, url: &str) -> Result<Vec<u8>, PokeApiError> {
        if let Some(body) = self.cache.get(url) {
            debug!("Cache hit for {}", url);
            return Ok(body);
        }

        info!("Cache miss, fetching {}", url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let body = response.bytes().await?.to_vec();

        self.cache.put(url, body.clone());
        Ok(body)
    }
}
