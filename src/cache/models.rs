//! Cache entry and statistics models.

use chrono::{DateTime, Utc};

/// A cached value together with its absolute expiry time.
///
/// Entries are owned by the cache; callers only ever receive clones of
/// `value`.
#[derive(Debug, Clone)]
pub struct CacheEntry<T> {
    pub value: T,
    pub expires_at: DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    /// An entry is expired once `now` has reached its expiry time.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// Statistics for cache operations.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of successful cache hits.
    pub hits: u64,
    /// Number of cache misses, including reads of expired entries.
    pub misses: u64,
    /// Number of stores.
    pub stores: u64,
    /// Number of entries removed because their TTL elapsed.
    pub evictions: u64,
}
