//! Explicit TTL memoization for provider queries.
//!
//! The original dashboards leaned on an implicit short-TTL decorator cache.
//! Here the policy is auditable: key = query parameters, value = result,
//! expiry = wall-clock TTL, plus an explicit [`TtlCache::clear`] for the
//! manual refresh action.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;

struct CacheEntry<T> {
    value: T,
    expires_at: Instant,
}

/// A process-wide time-to-live cache keyed by query-parameter strings.
pub struct TtlCache<T> {
    entries: RwLock<HashMap<String, CacheEntry<T>>>,
    ttl: Duration,
}

impl<T: Clone + Send + Sync> TtlCache<T> {
    /// Creates a cache whose entries expire `ttl` after insertion.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the cached value for `key` if present and not expired.
    pub async fn get(&self, key: &str) -> Option<T> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.value.clone())
    }

    /// Stores `value` under `key` with the configured TTL.
    pub async fn insert(&self, key: &str, value: T) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Removes a single key.
    pub async fn invalidate(&self, key: &str) {
        self.entries.write().await.remove(key);
    }

    /// Removes every entry, expired or not.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl<T> std::fmt::Debug for TtlCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TtlCache").field("ttl", &self.ttl).finish()
    }
}
