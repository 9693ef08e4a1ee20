//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: Removes stale cache entries at the configured interval

mod reaper;

pub use reaper::spawn_reaper_task;
