//! Configuration Module
//!
//! Handles loading the Pokedex configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default PokeAPI root, without a trailing slash.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Application configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache expiry and reap interval in seconds
    pub cache_interval: u64,
    /// HTTP request timeout in seconds
    pub request_timeout: u64,
    /// PokeAPI root URL
    pub api_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL` - Cache expiry interval in seconds (default: 10)
    /// - `REQUEST_TIMEOUT` - HTTP request timeout in seconds (default: 10)
    /// - `POKEAPI_BASE_URL` - PokeAPI root URL (default: https://pokeapi.co/api/v2)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_interval: env::var("CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout),
            api_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_base_url),
        }
    }

    /// Cache interval as a `Duration`.
    pub fn cache_interval_duration(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    /// Request timeout as a `Duration`.
    pub fn request_timeout_duration(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: 10,
            request_timeout: 10,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
