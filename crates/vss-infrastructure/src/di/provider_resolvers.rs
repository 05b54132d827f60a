//! Provider resolvers
//!
//! Wrap the linkme registry lookups so configuration errors come back as
//! domain configuration errors.

use std::sync::Arc;

use vss_application::ModelLoader;
use vss_application::ports::registry::{
    resolve_cache_provider, resolve_embedding_model, resolve_object_store,
};
use vss_domain::error::{Error, Result};
use vss_domain::ports::providers::{EmbeddingCacheProvider, ObjectStoreProvider};

use crate::config::{CacheConfig, EmbeddingConfig, StoreConfig};

/// Resolve the configured object store
pub fn resolve_store(config: &StoreConfig) -> Result<Arc<dyn ObjectStoreProvider>> {
    resolve_object_store(&config.to_registry()).map_err(Error::configuration)
}

/// Resolve the configured embedding cache
pub fn resolve_cache(config: &CacheConfig) -> Result<Arc<dyn EmbeddingCacheProvider>> {
    resolve_cache_provider(&config.to_registry()).map_err(Error::configuration)
}

/// Loader that builds the configured embedding model on demand
///
/// Resolution is deferred to the first call, so an unavailable model only
/// fails the requests that need it.
pub fn model_loader(config: &EmbeddingConfig) -> ModelLoader {
    let registry_config = config.to_registry();
    Arc::new(move || resolve_embedding_model(&registry_config).map_err(Error::model))
}
