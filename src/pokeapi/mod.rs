//! PokeAPI Module
//!
//! Response models and a fetch-through-cache HTTP client.

pub mod client;
pub mod models;

pub use client::PokeApiClient;
pub use models::{LocationAreaPage, NamedResource};
