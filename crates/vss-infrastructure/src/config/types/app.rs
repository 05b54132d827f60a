//! Main application configuration

use serde::{Deserialize, Serialize};
use vss_application::SearchSettings;

use super::{CacheConfig, EmbeddingConfig, FetchConfig, LoggingConfig, StoreConfig};

/// Main application configuration
///
/// Every section falls back to its defaults, so a TOML file only needs
/// the keys it changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Object store selection
    pub store: StoreConfig,

    /// Fetch concurrency and retry policy
    pub fetch: FetchConfig,

    /// Embedding model selection and batching
    pub embedding: EmbeddingConfig,

    /// Embedding cache
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Pipeline settings derived from this configuration
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            fetch: self.fetch.to_policy(),
            image_batch_size: self.embedding.image_batch_size,
        }
    }
}
