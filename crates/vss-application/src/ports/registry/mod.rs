//! Provider Registry System
//!
//! Defines the auto-registration infrastructure for plugin providers.
//! Uses the `linkme` crate for compile-time registration of providers
//! that can be discovered and instantiated at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Provider Registration Flow                    │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(PROVIDERS)]  │
//! │                        static ENTRY: ProviderEntry = ...        │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static PROVIDERS: [Entry] = [..]     │
//! │                              ↓                                  │
//! │  3. Resolver queries:  PROVIDERS.iter()                         │
//! │                              ↓                                  │
//! │  4. Config selects:    "provider = s3" → S3ObjectStore          │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ### Registering a Provider (in vss-providers)
//!
//! ```ignore
//! use vss_application::ports::registry::{ObjectStoreEntry, OBJECT_STORE_PROVIDERS};
//!
//! #[linkme::distributed_slice(OBJECT_STORE_PROVIDERS)]
//! static FILESYSTEM_STORE: ObjectStoreEntry = ObjectStoreEntry {
//!     name: "filesystem",
//!     description: "Local directory tree, one subdirectory per bucket",
//!     factory: |config| Ok(Arc::new(FilesystemObjectStore::from_config(config)?)),
//! };
//! ```
//!
//! ### Resolving a Provider (in vss-infrastructure)
//!
//! ```ignore
//! use vss_application::ports::registry::resolve_object_store;
//!
//! let config = ObjectStoreConfig::new("filesystem").with_root("/data");
//! let store = resolve_object_store(&config)?;
//! ```

pub mod cache;
pub mod embedding;
pub mod object_store;

// Re-export all registry types and functions
pub use cache::{
    CACHE_PROVIDERS, CacheProviderConfig, CacheProviderEntry, list_cache_providers,
    resolve_cache_provider,
};
pub use embedding::{
    EMBEDDING_MODEL_PROVIDERS, EmbeddingModelConfig, EmbeddingModelEntry,
    list_embedding_models, resolve_embedding_model,
};
pub use object_store::{
    OBJECT_STORE_PROVIDERS, ObjectStoreConfig, ObjectStoreEntry, list_object_stores,
    resolve_object_store,
};
