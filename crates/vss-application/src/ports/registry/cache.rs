//! Embedding Cache Registry

use std::sync::Arc;

use vss_domain::constants::EMBEDDING_CACHE_CAPACITY;
use vss_domain::ports::providers::EmbeddingCacheProvider;

/// Configuration for embedding cache creation
#[derive(Debug, Clone)]
pub struct CacheProviderConfig {
    /// Provider name (e.g., "moka", "null")
    pub provider: String,
    /// Maximum number of cached embeddings
    pub capacity: usize,
}

impl CacheProviderConfig {
    /// Create a new config with the given provider name and default capacity
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            capacity: EMBEDDING_CACHE_CAPACITY,
        }
    }

    /// Set the capacity
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Registry entry for embedding caches
pub struct CacheProviderEntry {
    /// Unique provider name (e.g., "moka", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&CacheProviderConfig) -> Result<Arc<dyn EmbeddingCacheProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static CACHE_PROVIDERS: [CacheProviderEntry] = [..];

/// Resolve embedding cache by name from registry
pub fn resolve_cache_provider(
    config: &CacheProviderConfig,
) -> Result<Arc<dyn EmbeddingCacheProvider>, String> {
    let provider_name = &config.provider;

    for entry in CACHE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = CACHE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown cache provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered embedding caches as (name, description) tuples
pub fn list_cache_providers() -> Vec<(&'static str, &'static str)> {
    CACHE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
