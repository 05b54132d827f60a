//! Application Port Interfaces
//!
//! ## Organization
//!
//! - **registry/** - Auto-registration system for plugin providers
//! - **services.rs** - Application service interfaces (search)

/// Provider registry for dynamic provider discovery
pub mod registry;
/// Application service interfaces
pub mod services;

pub use registry::{
    CacheProviderConfig, CacheProviderEntry, EmbeddingModelConfig, EmbeddingModelEntry,
    ObjectStoreConfig, ObjectStoreEntry, list_cache_providers, list_embedding_models,
    list_object_stores, resolve_cache_provider, resolve_embedding_model, resolve_object_store,
};
pub use services::SearchServiceInterface;
