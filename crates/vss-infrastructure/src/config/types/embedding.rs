//! Embedding model configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vss_application::ports::registry::EmbeddingModelConfig;
use vss_domain::constants::IMAGE_BATCH_SIZE;

use crate::constants::DEFAULT_EMBEDDING_PROVIDER;

/// Embedding configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Registered provider name (`fastembed`, `null`)
    pub provider: String,

    /// Model name understood by the provider
    pub model: Option<String>,

    /// Where downloaded weights are kept
    pub cache_dir: Option<PathBuf>,

    /// Print download progress while fetching weights
    pub show_download_progress: bool,

    /// Output dimensionality, for providers that accept one
    pub dimensions: Option<usize>,

    /// Images per encoder call
    pub image_batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: None,
            cache_dir: None,
            show_download_progress: false,
            dimensions: None,
            image_batch_size: IMAGE_BATCH_SIZE,
        }
    }
}

impl EmbeddingConfig {
    /// Registry configuration for this model
    pub fn to_registry(&self) -> EmbeddingModelConfig {
        let mut config = EmbeddingModelConfig::new(&self.provider);
        config.show_download_progress = self.show_download_progress;
        if let Some(model) = &self.model {
            config = config.with_model(model.clone());
        }
        if let Some(dir) = &self.cache_dir {
            config = config.with_cache_dir(dir.clone());
        }
        if let Some(dimensions) = self.dimensions {
            config = config.with_dimensions(dimensions);
        }
        config
    }
}
