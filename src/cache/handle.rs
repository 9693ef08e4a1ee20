//! Shared Cache Handle
//!
//! Thread-safe front of the cache: one lock around the store, one reaper task
//! per cache, and an explicit shutdown for that task.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, trace, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper_task;

// == Cache ==
/// Time-bounded key/value cache shared between callers.
///
/// Cloning is cheap and every clone sees the same entries and the same reaper.
/// Build one per process and hand clones to whatever needs it. The reaper
/// stops on [`Cache::shutdown`] or once the last clone is dropped.
#[derive(Debug, Clone)]
pub struct Cache {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    shutdown_tx: watch::Sender<bool>,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// Entries older than `interval` are removed on each reaper tick, and the
    /// reaper ticks every `interval`.
    ///
    /// The runtime must have its time driver enabled (`enable_time` or
    /// `enable_all`). Without it the reaper task fails on its first poll:
    /// [`Cache::is_reaper_running`] turns false, [`Cache::shutdown`] logs the
    /// failure, and entries never expire.
    ///
    /// # Errors
    /// - [`CacheError::InvalidInterval`] if `interval` is zero or too large to
    ///   schedule a first reap
    /// - [`CacheError::NoRuntime`] if called outside a Tokio runtime
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(interval));
        }

        let first_tick = Instant::now()
            .checked_add(interval)
            .ok_or(CacheError::InvalidInterval(interval))?;

        Handle::try_current().map_err(|_| CacheError::NoRuntime)?;

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper_task(store.clone(), first_tick, interval, shutdown_rx);

        debug!("Cache created with interval of {:?}", interval);

        Ok(Self {
            shared: Arc::new(Shared {
                store,
                interval,
                shutdown_tx,
                reaper: Mutex::new(Some(reaper)),
            }),
        })
    }

    // == Put ==
    /// Stores `value` under `key`, replacing any previous value and
    /// restarting its expiry clock.
    pub fn put(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        let key = key.into();
        let value = value.into();
        trace!(key = %key, bytes = value.len(), "cache put");
        self.shared.store.lock().put(key, value);
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if it has not been reaped.
    ///
    /// Reading does not extend the entry's lifetime.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let value = self.shared.store.lock().get(key);
        trace!(key = %key, hit = value.is_some(), "cache get");
        value
    }

    // == Shutdown ==
    /// Stops the reaper and waits for it to finish.
    ///
    /// Idempotent. The cache stays usable afterwards, but entries no longer
    /// expire.
    pub async fn shutdown(&self) {
        self.shared.shutdown_tx.send_replace(true);

        let reaper = self.shared.reaper.lock().take();
        if let Some(handle) = reaper {
            if let Err(err) = handle.await {
                warn!("Cache reaper ended abnormally: {}", err);
            }
        }
    }

    /// Whether the reaper task is still running.
    pub fn is_reaper_running(&self) -> bool {
        self.shared
            .reaper
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Introspection ==
    /// Returns the expiry and reap interval fixed at construction.
    pub fn interval(&self) -> Duration {
        self.shared.interval
    }

    /// Returns the number of entries not yet reaped.
    pub fn len(&self) -> usize {
        self.shared.store.lock().len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.shared.store.lock().is_empty()
    }

    /// Returns a snapshot of the usage counters.
    pub fn stats(&self) -> CacheStats {
        self.shared.store.lock().stats()
    }
}
