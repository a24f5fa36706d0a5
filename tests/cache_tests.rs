// Expiring cache tests - public API only

use chrono::Duration as ChronoDuration;
use signbridge::cache::{spawn_sweeper, ExpiringCache, Sweep};
use signbridge::utils::ManualClock;
use std::sync::Arc;
use std::time::Duration;

fn cache_on(clock: &ManualClock) -> ExpiringCache<String> {
    ExpiringCache::with_clock("tests", Arc::new(clock.clone()))
}

#[test]
fn test_missing_key_is_absent() {
    let clock = ManualClock::default();
    let cache = cache_on(&clock);
    assert_eq!(cache.get("never-set"), None);
    assert!(cache.is_empty());
}

#[test]
fn test_entry_absent_after_ttl_elapses() {
    let clock = ManualClock::default();
    let cache = cache_on(&clock);
    cache.set("gloss:你好", "HELLO".to_string(), Duration::from_secs(60));

    clock.advance(ChronoDuration::seconds(59));
    assert_eq!(cache.get("gloss:你好").as_deref(), Some("HELLO"));

    clock.advance(ChronoDuration::seconds(1));
    assert_eq!(cache.get("gloss:你好"), None);
}

#[test]
fn test_ttls_are_independent_per_entry() {
    let clock = ManualClock::default();
    let cache = cache_on(&clock);
    cache.set("short", "a".to_string(), Duration::from_millis(10));
    cache.set("long", "b".to_string(), Duration::from_secs(3600));

    clock.advance(ChronoDuration::seconds(1));
    assert_eq!(cache.get("short"), None);
    assert_eq!(cache.get("long").as_deref(), Some("b"));
}

#[test]
fn test_set_overwrites_and_restarts_ttl() {
    let clock = ManualClock::default();
    let cache = cache_on(&clock);
    cache.set("k", "first".to_string(), Duration::from_secs(10));

    clock.advance(ChronoDuration::seconds(8));
    cache.set("k", "second".to_string(), Duration::from_secs(10));

    clock.advance(ChronoDuration::seconds(8));
    assert_eq!(cache.get("k").as_deref(), Some("second"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_purge_expired_and_clear() {
    let clock = ManualClock::default();
    let cache = cache_on(&clock);
    cache.set("a", "1".to_string(), Duration::from_secs(1));
    cache.set("b", "2".to_string(), Duration::from_secs(1));
    cache.set("c", "3".to_string(), Duration::from_secs(100));

    clock.advance(ChronoDuration::seconds(2));
    assert_eq!(cache.purge_expired(), 2);
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.stats().evictions, 2);

    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_clones_share_storage() {
    let clock = ManualClock::default();
    let cache = cache_on(&clock);
    let other = cache.clone();
    cache.set("k", "v".to_string(), Duration::from_secs(1));
    assert_eq!(other.get("k").as_deref(), Some("v"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sets_are_last_write_wins() {
    let clock = ManualClock::default();
    let cache = cache_on(&clock);

    let mut tasks = Vec::new();
    for i in 0..32 {
        let cache = cache.clone();
        tasks.push(tokio::spawn(async move {
            for j in 0..100 {
                cache.set("shared", format!("{}-{}", i, j), Duration::from_secs(60));
                let _ = cache.get("shared");
            }
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    // One intact entry holding some writer's final value
    assert_eq!(cache.len(), 1);
    let value = cache.get("shared").unwrap();
    assert!(value.ends_with("-99"));
    assert_eq!(cache.stats().stores, 32 * 100);
}

#[tokio::test]
async fn test_sweeper_purges_in_background() {
    let clock = ManualClock::default();
    let cache = cache_on(&clock);
    cache.set("k", "v".to_string(), Duration::from_secs(1));
    clock.advance(ChronoDuration::seconds(5));

    let targets: Vec<Arc<dyn Sweep>> = vec![Arc::new(cache.clone())];
    let handle = spawn_sweeper(targets, Duration::from_millis(10)).unwrap();

    tokio::time::sleep(Duration::from_millis(100)).await;
    handle.abort();

    assert_eq!(cache.len(), 0);
}

#[test]
fn test_zero_interval_disables_sweeper() {
    let clock = ManualClock::default();
    let cache = cache_on(&clock);
    let targets: Vec<Arc<dyn Sweep>> = vec![Arc::new(cache)];
    assert!(spawn_sweeper(targets, Duration::ZERO).is_none());
}
