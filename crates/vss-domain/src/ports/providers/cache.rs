//! Embedding Cache Provider Port
//!
//! Process-wide memo from a stable image identity (bucket plus object key) to its
//! normalized embedding. Survives across requests; bounded in size with
//! least-recently-used eviction.

use serde::{Deserialize, Serialize};

use crate::value_objects::{CacheKey, EmbeddingVector};

/// Cache Operation Statistics
///
/// Tracks cache performance metrics including hits, misses, and hit rate.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of cache entries
    pub entries: u64,
    /// Maximum number of entries
    pub capacity: u64,
}

impl CacheStats {
    /// Calculate hit rate from hits and misses
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total > 0 {
            self.hits as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Embedding Cache Interface
///
/// All operations must be safe under concurrent use from several in-flight
/// requests. After `insert` returns, the cache holds at most `capacity`
/// entries and any evicted entry was the least recently used one.
///
/// Operations are synchronous: they never wait on I/O.
pub trait EmbeddingCacheProvider: Send + Sync + std::fmt::Debug {
    /// Look up a key, marking it as recently used on hit
    fn get(&self, key: &CacheKey) -> Option<EmbeddingVector>;

    /// Insert or replace an entry, evicting beyond capacity
    fn insert(&self, key: CacheKey, vector: EmbeddingVector);

    /// Whether the key is present, without touching recency
    fn contains(&self, key: &CacheKey) -> bool;

    /// Number of entries currently held
    fn len(&self) -> usize;

    /// Whether the cache is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry
    fn clear(&self);

    /// Get cache statistics
    fn stats(&self) -> CacheStats;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "moka", "null")
    fn provider_name(&self) -> &str;
}
