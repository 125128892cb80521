//! Cache Store Module
//!
//! Read-through cache storage: callers look up a key, fetch on miss and
//! write the result back. Entries are overwritten on refresh and never
//! evicted otherwise.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{CacheEntry, CacheKey, CacheStats};
use crate::upstream::{Categories, Product};

/// Cache store shared between the resolver and the API layer.
pub type SharedCache = Arc<RwLock<CacheStore>>;

// == Cached Value ==
/// Payloads the store can hold.
#[derive(Debug, Clone)]
pub enum CachedValue {
    /// Complete product set in upstream order
    Products(Arc<Vec<Product>>),
    /// Category list as returned by upstream
    Categories(Arc<Categories>),
}

// == Cache Store ==
/// Key to (value, stored-at) mapping with a fixed TTL.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<CacheKey, CacheEntry<CachedValue>>,
    /// Performance statistics
    stats: CacheStats,
    /// How long an entry stays readable
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    /// Wraps a new store for sharing across tasks.
    pub fn shared(ttl: Duration) -> SharedCache {
        Arc::new(RwLock::new(Self::new(ttl)))
    }

    // == Get ==
    /// Returns the value under `key` if present and younger than the TTL.
    ///
    /// Expired entries are left in place until the next `put` overwrites them.
    pub fn get(&mut self, key: &CacheKey) -> Option<CachedValue> {
        match self.entries.get(key) {
            Some(entry) if entry.is_fresh(self.ttl) => {
                self.stats.record_hit();
                debug!(key = %key, age_ms = entry.age().as_millis() as u64, "cache hit");
                Some(entry.value.clone())
            }
            Some(_) => {
                self.stats.record_stale();
                debug!(key = %key, "cache entry expired");
                None
            }
            None => {
                self.stats.record_miss();
                debug!(key = %key, "cache miss");
                None
            }
        }
    }

    // == Put ==
    /// Stores `value` under `key` stamped with the current time,
    /// overwriting any prior entry.
    pub fn put(&mut self, key: CacheKey, value: CachedValue) {
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_total_entries(self.entries.len());
    }

    // == Typed Accessors ==
    /// Fresh full product set for a normalized category.
    pub fn get_products(&mut self, category: Option<&str>) -> Option<Arc<Vec<Product>>> {
        match self.get(&CacheKey::product_set(category)) {
            Some(CachedValue::Products(products)) => Some(products),
            _ => None,
        }
    }

    pub fn put_products(&mut self, category: Option<&str>, products: Arc<Vec<Product>>) {
        self.put(
            CacheKey::product_set(category),
            CachedValue::Products(products),
        );
    }

    /// Fresh category list.
    pub fn get_categories(&mut self) -> Option<Arc<Categories>> {
        match self.get(&CacheKey::Categories) {
            Some(CachedValue::Categories(categories)) => Some(categories),
            _ => None,
        }
    }

    pub fn put_categories(&mut self, categories: Arc<Categories>) {
        self.put(CacheKey::Categories, CachedValue::Categories(categories));
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Length ==
    /// Returns the current number of entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
