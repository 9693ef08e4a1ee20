//! Integration Tests for the Cache
//!
//! Exercises the public `Cache` API end to end: hits, misses, overwrites,
//! reaper-driven expiry, concurrent callers and shutdown.

use std::time::Duration;

use pokecache::{Cache, CacheError};
use tokio::time::sleep;

// == Helper Functions ==

fn long_lived_cache() -> Cache {
    Cache::new(Duration::from_secs(60)).unwrap()
}

// == Hit / Miss ==

#[tokio::test]
async fn test_get_missing_on_fresh_cache() {
    let cache = long_lived_cache();

    assert_eq!(cache.get("missing"), None);
    assert!(cache.is_empty());

    cache.shutdown().await;
}

#[tokio::test]
async fn test_put_then_get() {
    let cache = long_lived_cache();

    cache.put("https://pokeapi.co/api/v2/location-area/", b"{\"count\":0}".to_vec());

    assert_eq!(
        cache.get("https://pokeapi.co/api/v2/location-area/"),
        Some(b"{\"count\":0}".to_vec())
    );

    cache.shutdown().await;
}

#[tokio::test]
async fn test_overwrite_last_write_wins() {
    let cache = long_lived_cache();

    cache.put("x", vec![9]);
    cache.put("x", vec![8]);

    assert_eq!(cache.get("x"), Some(vec![8]));
    assert_eq!(cache.len(), 1);

    cache.shutdown().await;
}

#[tokio::test]
async fn test_empty_key_and_value_are_allowed() {
    let cache = long_lived_cache();

    cache.put("", Vec::new());

    assert_eq!(cache.get(""), Some(Vec::new()));

    cache.shutdown().await;
}

// == Expiry ==

#[tokio::test(start_paused = true)]
async fn test_entry_expires_after_interval_and_one_reap() {
    let cache = Cache::new(Duration::from_millis(500)).unwrap();

    cache.put("a", vec![1, 2, 3]);
    assert_eq!(cache.get("a"), Some(vec![1, 2, 3]));

    sleep(Duration::from_millis(1100)).await;

    assert_eq!(cache.get("a"), None);
    assert_eq!(cache.stats().reaped, 1);

    cache.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_young_entry_survives_reap() {
    let cache = Cache::new(Duration::from_millis(500)).unwrap();

    sleep(Duration::from_millis(400)).await;
    cache.put("young", vec![1]);

    // Reaper ticked at 500ms while the entry was 100ms old
    sleep(Duration::from_millis(300)).await;
    assert_eq!(cache.get("young"), Some(vec![1]));

    cache.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_get_does_not_extend_lifetime() {
    let cache = Cache::new(Duration::from_millis(500)).unwrap();
    cache.put("a", vec![1]);

    // Reads at 200ms steps; the reaper removes it at the 1000ms tick regardless
    for _ in 0..6 {
        sleep(Duration::from_millis(200)).await;
        cache.get("a");
    }

    assert_eq!(cache.get("a"), None);

    cache.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_overwrite_restarts_expiry_clock() {
    let cache = Cache::new(Duration::from_millis(500)).unwrap();
    cache.put("a", vec![1]);

    sleep(Duration::from_millis(800)).await;
    cache.put("a", vec![2]);

    // First write would have been reaped at 1000ms; second is only 200ms old
    sleep(Duration::from_millis(300)).await;
    assert_eq!(cache.get("a"), Some(vec![2]));

    cache.shutdown().await;
}

// == Concurrency ==

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_on_disjoint_keys() {
    let cache = long_lived_cache();

    let workers: Vec<_> = (0..8)
        .map(|worker| {
            let cache = cache.clone();
            tokio::spawn(async move {
                for i in 0..200u32 {
                    let key = format!("worker-{}/key-{}", worker, i % 50);
                    let value = [worker as u8, (i >> 8) as u8, i as u8].to_vec();
                    cache.put(key.clone(), value.clone());
                    assert_eq!(cache.get(&key), Some(value));
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for worker in workers {
        worker.await.unwrap();
    }

    assert_eq!(cache.len(), 8 * 50);
    // Last write for key-49 of each worker was i = 199
    for worker in 0..8u8 {
        assert_eq!(
            cache.get(&format!("worker-{}/key-49", worker)),
            Some(vec![worker, 0, 199])
        );
    }

    cache.shutdown().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_callers_interleave_with_reap_passes() {
    let interval = Duration::from_millis(25);
    let cache = Cache::new(interval).unwrap();

    // Written once, so only the reaper can make them disappear
    for i in 0..20 {
        cache.put(format!("stale-{}", i), vec![i as u8]);
    }

    let deadline = std::time::Instant::now() + interval * 10;
    let workers: Vec<_> = (0..6u8)
        .map(|worker| {
            let cache = cache.clone();
            tokio::spawn(async move {
                let mut round = 0u32;
                while std::time::Instant::now() < deadline {
                    for slot in 0..10u8 {
                        let key = format!("worker-{}/slot-{}", worker, slot);
                        let value = [worker, slot, round as u8].to_vec();
                        cache.put(key.clone(), value.clone());
                        assert_eq!(cache.get(&key), Some(value));
                    }
                    round += 1;
                    tokio::task::yield_now().await;
                }
            })
        })
        .collect();

    for worker in workers {
        worker.await.unwrap();
    }

    for i in 0..20 {
        assert_eq!(cache.get(&format!("stale-{}", i)), None);
    }
    assert!(cache.stats().reaped >= 20);

    cache.shutdown().await;
}

#[test]
fn test_callers_on_plain_threads() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let cache = runtime.block_on(async { long_lived_cache() });

    let threads: Vec<_> = (0..4)
        .map(|t| {
            let cache = cache.clone();
            std::thread::spawn(move || {
                for i in 0..100 {
                    cache.put(format!("{}-{}", t, i), vec![t as u8]);
                }
            })
        })
        .collect();

    for thread in threads {
        thread.join().unwrap();
    }

    assert_eq!(cache.len(), 400);
    runtime.block_on(cache.shutdown());
}

// == Lifecycle ==

#[test]
fn test_zero_interval_is_rejected() {
    let err = Cache::new(Duration::ZERO).unwrap_err();
    assert!(matches!(err, CacheError::InvalidInterval(_)));
}

#[tokio::test]
async fn test_huge_interval_is_rejected() {
    let err = Cache::new(Duration::from_secs(u64::MAX)).unwrap_err();
    assert!(matches!(err, CacheError::InvalidInterval(_)));
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_is_visible_to_every_clone() {
    let cache = Cache::new(Duration::from_millis(100)).unwrap();
    let other = cache.clone();

    other.shutdown().await;

    assert!(!cache.is_reaper_running());
    cache.put("kept", vec![1]);
    sleep(Duration::from_secs(1)).await;
    assert_eq!(cache.get("kept"), Some(vec![1]));
}
