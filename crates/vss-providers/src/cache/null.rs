//! Null embedding cache
//!
//! Stores nothing. Every lookup misses, so every image is re-encoded.

use std::sync::atomic::{AtomicU64, Ordering};

use vss_domain::ports::providers::{CacheStats, EmbeddingCacheProvider};
use vss_domain::value_objects::{CacheKey, EmbeddingVector};

/// Null embedding cache for testing
#[derive(Debug, Default)]
pub struct NullEmbeddingCache {
    misses: AtomicU64,
}

impl NullEmbeddingCache {
    /// Create a new null cache
    pub fn new() -> Self {
        Self::default()
    }
}

impl EmbeddingCacheProvider for NullEmbeddingCache {
    fn get(&self, _key: &CacheKey) -> Option<EmbeddingVector> {
        self.misses.fetch_add(1, Ordering::Relaxed);
        None
    }

    fn insert(&self, _key: CacheKey, _vector: EmbeddingVector) {}

    fn contains(&self, _key: &CacheKey) -> bool {
        false
    }

    fn len(&self) -> usize {
        0
    }

    fn clear(&self) {}

    fn stats(&self) -> CacheStats {
        CacheStats {
            misses: self.misses.load(Ordering::Relaxed),
            ..CacheStats::default()
        }
    }

    fn provider_name(&self) -> &str {
        "null"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use vss_application::ports::registry::{CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry};

#[linkme::distributed_slice(CACHE_PROVIDERS)]
static NULL_PROVIDER: CacheProviderEntry = CacheProviderEntry {
    name: "null",
    description: "Null cache (never stores, always misses)",
    factory: |_config: &CacheProviderConfig| Ok(std::sync::Arc::new(NullEmbeddingCache::new())),
};
