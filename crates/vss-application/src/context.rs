//! Process-scoped search context
//!
//! Owns everything that outlives a single request: the object store
//! handle, the embedding cache and the lazily loaded model. One context is
//! built at startup and shared by every request.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::OnceCell;
use tracing::{info, warn};
use vss_domain::constants::IMAGE_BATCH_SIZE;
use vss_domain::error::{Error, Result};
use vss_domain::ports::providers::{
    EmbeddingCacheProvider, EmbeddingModelProvider, ObjectStoreProvider,
};

use crate::domain_services::FetchPolicy;

/// Builds the embedding model; runs on a blocking thread at most once
/// successfully per context
pub type ModelLoader =
    Arc<dyn Fn() -> Result<Arc<dyn EmbeddingModelProvider>> + Send + Sync>;

/// Per-process pipeline settings
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    /// Fetch concurrency, retry and resize policy
    pub fetch: FetchPolicy,
    /// Images per encoder call
    pub image_batch_size: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            fetch: FetchPolicy::default(),
            image_batch_size: IMAGE_BATCH_SIZE,
        }
    }
}

/// Shared state for all requests in a process
pub struct SearchContext {
    store: Arc<dyn ObjectStoreProvider>,
    cache: Arc<dyn EmbeddingCacheProvider>,
    model: OnceCell<Arc<dyn EmbeddingModelProvider>>,
    loader: ModelLoader,
    settings: SearchSettings,
}

impl SearchContext {
    /// Create a context whose model is loaded on first use
    pub fn new(
        store: Arc<dyn ObjectStoreProvider>,
        cache: Arc<dyn EmbeddingCacheProvider>,
        loader: ModelLoader,
        settings: SearchSettings,
    ) -> Self {
        Self {
            store,
            cache,
            model: OnceCell::new(),
            loader,
            settings,
        }
    }

    /// Create a context around an already loaded model
    pub fn with_model(
        store: Arc<dyn ObjectStoreProvider>,
        cache: Arc<dyn EmbeddingCacheProvider>,
        model: Arc<dyn EmbeddingModelProvider>,
        settings: SearchSettings,
    ) -> Self {
        let loaded = Arc::clone(&model);
        let loader: ModelLoader = Arc::new(move || Ok(Arc::clone(&loaded)));
        Self {
            store,
            cache,
            model: OnceCell::new_with(Some(model)),
            loader,
            settings,
        }
    }

    /// The object store
    pub fn store(&self) -> &Arc<dyn ObjectStoreProvider> {
        &self.store
    }

    /// The shared embedding cache
    pub fn cache(&self) -> &Arc<dyn EmbeddingCacheProvider> {
        &self.cache
    }

    /// Pipeline settings
    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// Whether the model has been loaded
    pub fn is_model_loaded(&self) -> bool {
        self.model.initialized()
    }

    /// Get the model, loading it if this is the first call
    ///
    /// Concurrent callers wait for the one load in progress. A failed load
    /// leaves the cell empty so a later call tries again.
    pub async fn model(&self) -> Result<Arc<dyn EmbeddingModelProvider>> {
        self.model
            .get_or_try_init(|| async {
                let loader = Arc::clone(&self.loader);
                let started = Instant::now();
                let model = tokio::task::spawn_blocking(move || loader())
                    .await
                    .map_err(|e| Error::model(format!("model loader panicked: {e}")))?
                    .inspect_err(|e| warn!(error = %e, "Model initialization failed"))?;
                info!(
                    provider = model.provider_name(),
                    model = model.model_name(),
                    dimensions = model.dimensions(),
                    elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "Embedding model loaded"
                );
                Ok::<_, Error>(model)
            })
            .await
            .map(Arc::clone)
    }
}

impl fmt::Debug for SearchContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchContext")
            .field("store", &self.store.provider_name())
            .field("cache", &self.cache)
            .field("model_loaded", &self.is_model_loaded())
            .field("settings", &self.settings)
            .finish()
    }
}
