//! Cache Entry Module
//!
//! Defines the structure for individual cache entries and their expiry check.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A single cached payload together with the time it was written.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// Monotonic timestamp of the most recent write
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self::created_at(value, Instant::now())
    }

    /// Creates a new entry stamped with the given time.
    pub fn created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Time elapsed between the write and `now`, zero if `now` is earlier.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Stale ==
    /// Checks whether the entry is older than `interval` at `now`.
    ///
    /// Boundary condition: the comparison is strict. An entry that is exactly
    /// `interval` old is still fresh and survives the reap pass.
    pub fn is_stale(&self, now: Instant, interval: Duration) -> bool {
        self.age(now) > interval
    }
}
