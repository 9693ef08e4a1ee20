//! pokecache - A time-bounded in-memory response cache
//!
//! Memoizes fetched payloads by key for a fixed interval; a background reaper
//! removes stale entries. Ships with a small Pokedex REPL that fetches
//! PokeAPI pages through the cache.

pub mod cache;
pub mod config;
pub mod error;
pub mod pokeapi;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use error::{CacheError, PokeApiError, ReplError};
