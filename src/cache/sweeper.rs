// Background expiry sweep

use crate::cache::ExpiringCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::debug;

/// A cache that can drop its expired entries on demand.
pub trait Sweep: Send + Sync {
    fn name(&self) -> &str;
    fn purge_expired(&self) -> usize;
}

impl<V: Clone + Send + Sync> Sweep for ExpiringCache<V> {
    fn name(&self) -> &str {
        ExpiringCache::name(self)
    }

    fn purge_expired(&self) -> usize {
        ExpiringCache::purge_expired(self)
    }
}

/// Periodically purge expired entries from `targets`.
///
/// Returns `None` when `every` is zero; reads still evict lazily in that case.
pub fn spawn_sweeper(targets: Vec<Arc<dyn Sweep>>, every: Duration) -> Option<JoinHandle<()>> {
    if every.is_zero() {
        return None;
    }

    Some(tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            ticker.tick().await;
            for target in &targets {
                let removed = target.purge_expired();
                if removed > 0 {
                    debug!("Sweeper removed {} entries from {} cache", removed, target.name());
                }
            }
        }
    }))
}
