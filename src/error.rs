//! Error types for the cache and the Pokedex client
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing a cache.
///
/// `put` and `get` never fail, so construction is the only fallible step.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The reap interval must be greater than zero
    #[error("Invalid interval: {0:?} (must be greater than zero)")]
    InvalidInterval(Duration),

    /// The reaper task needs a Tokio runtime to run on
    #[error("No Tokio runtime available to host the reaper task")]
    NoRuntime,
}

// == PokeAPI Error Enum ==
/// Errors raised while fetching or decoding PokeAPI responses.
#[derive(Error, Debug)]
pub enum PokeApiError {
    /// Transport failure or non-success HTTP status
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}

// == REPL Error Enum ==
/// Errors surfaced by the interactive command loop.
#[derive(Error, Debug)]
pub enum ReplError {
    #[error(transparent)]
    Api(#[from] PokeApiError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

// == Result Type Alias ==
/// Convenience Result type for cache construction.
pub type Result<T> = std::result::Result<T, CacheError>;
