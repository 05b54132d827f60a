//! Embedding Model Registry
//!
//! Auto-registration system for embedding models using linkme distributed slices.
//! Factories load model weights and may block for a long time; callers run
//! them off the async runtime.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use vss_domain::ports::providers::EmbeddingModelProvider;

/// Configuration for embedding model creation
///
/// Contains all configuration options that a model provider might need.
/// Providers should use what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct EmbeddingModelConfig {
    /// Provider name (e.g., "fastembed", "null")
    pub provider: String,
    /// Model name/identifier
    pub model: Option<String>,
    /// Directory where downloaded weights are kept
    pub cache_dir: Option<PathBuf>,
    /// Show download progress while fetching weights
    pub show_download_progress: bool,
    /// Embedding dimensions (if configurable)
    pub dimensions: Option<usize>,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl EmbeddingModelConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the weights cache directory
    pub fn with_cache_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cache_dir = Some(dir.into());
        self
    }

    /// Set the dimensions
    pub fn with_dimensions(mut self, dimensions: usize) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    /// Add extra configuration
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Registry entry for embedding models
///
/// Each model implementation registers itself with this entry using
/// `#[linkme::distributed_slice(EMBEDDING_MODEL_PROVIDERS)]`.
pub struct EmbeddingModelEntry {
    /// Unique provider name (e.g., "fastembed", "null")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&EmbeddingModelConfig) -> Result<Arc<dyn EmbeddingModelProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static EMBEDDING_MODEL_PROVIDERS: [EmbeddingModelEntry] = [..];

/// Resolve embedding model by name from registry
///
/// # Returns
/// * `Ok(Arc<dyn EmbeddingModelProvider>)` - Loaded model
/// * `Err(String)` - Error message if provider not found or loading failed
pub fn resolve_embedding_model(
    config: &EmbeddingModelConfig,
) -> Result<Arc<dyn EmbeddingModelProvider>, String> {
    let provider_name = &config.provider;

    for entry in EMBEDDING_MODEL_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = EMBEDDING_MODEL_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown embedding provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered embedding models as (name, description) tuples
pub fn list_embedding_models() -> Vec<(&'static str, &'static str)> {
    EMBEDDING_MODEL_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
