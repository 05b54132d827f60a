//! Moka embedding cache provider
//!
//! Bounded, concurrent, least-recently-used cache of image embeddings
//! keyed by bucket and object key.
//!
//! ## Example
//!
//! ```ignore
//! use vss_providers::cache::MokaEmbeddingCache;
//!
//! let cache = MokaEmbeddingCache::new(10_000);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use moka::policy::EvictionPolicy;
use moka::sync::Cache;
use vss_domain::ports::providers::{CacheStats, EmbeddingCacheProvider};
use vss_domain::value_objects::{CacheKey, EmbeddingVector};

use crate::constants::CACHE_DEFAULT_CAPACITY;

/// Moka-based embedding cache
///
/// Uses Moka's LRU eviction policy. Pending maintenance is run after each
/// insert, so the capacity bound holds as soon as `insert` returns.
pub struct MokaEmbeddingCache {
    cache: Cache<CacheKey, EmbeddingVector>,
    capacity: usize,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl MokaEmbeddingCache {
    /// Create a cache holding at most `capacity` embeddings
    pub fn new(capacity: usize) -> Self {
        let cache = Cache::builder()
            .max_capacity(capacity as u64)
            .eviction_policy(EvictionPolicy::lru())
            .build();

        Self {
            cache,
            capacity,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get the maximum capacity of the cache
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for MokaEmbeddingCache {
    fn default() -> Self {
        Self::new(CACHE_DEFAULT_CAPACITY)
    }
}

impl EmbeddingCacheProvider for MokaEmbeddingCache {
    fn get(&self, key: &CacheKey) -> Option<EmbeddingVector> {
        let found = self.cache.get(key);
        let counter = if found.is_some() {
            &self.hits
        } else {
            &self.misses
        };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    fn insert(&self, key: CacheKey, vector: EmbeddingVector) {
        self.cache.insert(key, vector);
        self.cache.run_pending_tasks();
    }

    fn contains(&self, key: &CacheKey) -> bool {
        self.cache.contains_key(key)
    }

    fn len(&self) -> usize {
        self.cache.run_pending_tasks();
        usize::try_from(self.cache.entry_count()).unwrap_or(usize::MAX)
    }

    fn clear(&self) {
        self.cache.invalidate_all();
        self.cache.run_pending_tasks();
    }

    fn stats(&self) -> CacheStats {
        self.cache.run_pending_tasks();
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
            capacity: self.capacity as u64,
        }
    }

    fn provider_name(&self) -> &str {
        "moka"
    }
}

impl std::fmt::Debug for MokaEmbeddingCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaEmbeddingCache")
            .field("capacity", &self.capacity)
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use vss_application::ports::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static MOKA_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "moka",
    description: "Moka bounded LRU embedding cache",
    factory: |config: &CacheProviderConfig| {
        Ok(std::sync::Arc::new(MokaEmbeddingCache::new(config.capacity)))
    },
};
