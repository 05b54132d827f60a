//! Embedding cache configuration types

use serde::{Deserialize, Serialize};
use vss_application::ports::registry::CacheProviderConfig;
use vss_domain::constants::EMBEDDING_CACHE_CAPACITY;

use crate::constants::{DEFAULT_CACHE_PROVIDER, DISABLED_CACHE_PROVIDER};

/// Cache configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Cache enabled
    pub enabled: bool,

    /// Registered provider name
    pub provider: String,

    /// Maximum number of embeddings kept
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: DEFAULT_CACHE_PROVIDER.to_string(),
            capacity: EMBEDDING_CACHE_CAPACITY,
        }
    }
}

impl CacheConfig {
    /// Registry configuration; a disabled cache resolves to the null cache
    pub fn to_registry(&self) -> CacheProviderConfig {
        let provider = if self.enabled {
            self.provider.as_str()
        } else {
            DISABLED_CACHE_PROVIDER
        };
        CacheProviderConfig::new(provider).with_capacity(self.capacity)
    }
}
