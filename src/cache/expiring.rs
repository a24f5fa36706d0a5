// Expiring in-memory cache with a per-entry TTL

use crate::cache::models::{CacheEntry, CacheStats};
use crate::metrics;
use crate::utils::clock::{Clock, SystemClock};
use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// String-keyed cache whose entries each carry their own expiry time.
///
/// Expired entries are dropped lazily when read, or in bulk by
/// [`purge_expired`](Self::purge_expired). Each `get` and `set` holds the
/// map lock for its whole critical section, so concurrent callers see
/// last-write-wins semantics and never a torn entry. Clones share storage.
#[derive(Clone)]
pub struct ExpiringCache<V> {
    name: &'static str,
    entries: Arc<RwLock<HashMap<String, CacheEntry<V>>>>,
    stats: Arc<Mutex<CacheStats>>,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ExpiringCache<V> {
    /// Create a cache driven by the wall clock. `name` labels logs and metrics.
    pub fn new(name: &'static str) -> Self {
        Self::with_clock(name, Arc::new(SystemClock))
    }

    pub fn with_clock(name: &'static str, clock: Arc<dyn Clock>) -> Self {
        Self {
            name,
            entries: Arc::new(RwLock::new(HashMap::new())),
            stats: Arc::new(Mutex::new(CacheStats::default())),
            clock,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Look up `key`, returning `None` if it was never set or its TTL has elapsed.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = self.clock.now();

        {
            let entries = self.entries.read();
            match entries.get(key) {
                Some(entry) if !entry.is_expired(now) => {
                    let value = entry.value.clone();
                    drop(entries);
                    self.note_hit();
                    return Some(value);
                }
                Some(_) => {}
                None => {
                    drop(entries);
                    self.note_miss();
                    return None;
                }
            }
        }

        // Expired: re-check under the write lock, a concurrent set may have refreshed it
        let mut entries = self.entries.write();
        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                let value = entry.value.clone();
                drop(entries);
                self.note_hit();
                Some(value)
            }
            Some(_) => {
                entries.remove(key);
                let remaining = entries.len();
                drop(entries);
                debug!("{} cache entry expired", self.name);
                self.note_evictions(1, remaining);
                self.note_miss();
                None
            }
            None => {
                drop(entries);
                self.note_miss();
                None
            }
        }
    }

    /// Store `value` under `key`, replacing any existing entry. The expiry
    /// is fixed at `now + ttl` when this is called.
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let now = self.clock.now();
        let expires_at = chrono::Duration::from_std(ttl)
            .ok()
            .and_then(|ttl| now.checked_add_signed(ttl))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);

        let mut entries = self.entries.write();
        entries.insert(key.into(), CacheEntry { value, expires_at });
        let len = entries.len();
        drop(entries);

        self.stats.lock().stores += 1;
        metrics::record_cache_store(self.name);
        metrics::update_cache_entries(self.name, len);
    }

    /// Remove every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.write();
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(now));
        let remaining = entries.len();
        drop(entries);

        let removed = before - remaining;
        if removed > 0 {
            debug!("Purged {} expired {} cache entries", removed, self.name);
            self.note_evictions(removed, remaining);
        }
        removed
    }

    /// Number of stored entries, including expired ones not yet evicted.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Clear all cached entries
    pub fn clear(&self) {
        self.entries.write().clear();
        metrics::update_cache_entries(self.name, 0);
        debug!("{} cache cleared", self.name);
    }

    /// Get cache statistics
    pub fn stats(&self) -> CacheStats {
        self.stats.lock().clone()
    }

    fn note_hit(&self) {
        self.stats.lock().hits += 1;
        metrics::record_cache_hit(self.name);
    }

    fn note_miss(&self) {
        self.stats.lock().misses += 1;
        metrics::record_cache_miss(self.name);
    }

    fn note_evictions(&self, count: usize, remaining: usize) {
        self.stats.lock().evictions += count as u64;
        metrics::record_cache_evictions(self.name, count);
        metrics::update_cache_entries(self.name, remaining);
    }
}

impl<V> std::fmt::Debug for ExpiringCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpiringCache")
            .field("name", &self.name)
            .field("entries", &self.entries.read().len())
            .finish()
    }
}
