//! Reaper Task
//!
//! Background task that periodically removes stale cache entries.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that reaps stale entries every `interval`.
///
/// The first pass runs at `first_tick`, later passes one `interval` apart.
/// Between passes the task sleeps on a Tokio timer and watches `shutdown`:
/// it exits when the flag becomes `true` or when the sender side is dropped.
///
/// The timer is built inside the task, so a runtime without the time driver
/// fails the task (visible through its `JoinHandle`) rather than the caller.
///
/// The store lock is only held for the reap pass itself, never across an
/// await point.
///
/// # Example
/// ```ignore
/// let interval = Duration::from_secs(5);
/// let store = Arc::new(Mutex::new(CacheStore::new(interval)));
/// let (shutdown_tx, shutdown_rx) = watch::channel(false);
/// let handle = spawn_reaper_task(store.clone(), Instant::now() + interval, interval, shutdown_rx);
/// // Later:
/// shutdown_tx.send_replace(true);
/// handle.await?;
/// ```
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    first_tick: Instant,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = interval_at(first_tick, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!("Starting cache reaper with interval of {:?}", interval);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let removed = store.lock().reap_expired();

                    if removed > 0 {
                        info!("Cache reap: removed {} stale entries", removed);
                    } else {
                        debug!("Cache reap: no stale entries found");
                    }
                }
                changed = shutdown.changed() => {
                    // Err means every cache handle is gone
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        info!("Cache reaper stopped");
    })
}
