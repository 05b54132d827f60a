//! # Visual Search Service - Provider Implementations
//!
//! Implementations of the ports defined in `vss-domain`. Each provider
//! registers a factory into the linkme registries of `vss-application`, so
//! linking this crate is enough to make it selectable by name.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Object Store | `ObjectStoreProvider` | Filesystem, InMemory, S3 |
//! | Embedding | `EmbeddingModelProvider` | FastEmbed CLIP, Null |
//! | Cache | `EmbeddingCacheProvider` | Moka, Null |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! vss-providers = { version = "0.1", features = ["store-s3", "embedding-fastembed"] }
//! ```

// Re-export vss-domain types commonly used with providers
pub use vss_domain::error::{Error, Result};
pub use vss_domain::ports::providers::{
    EmbeddingCacheProvider, EmbeddingModelProvider, ObjectStoreProvider,
};

/// Provider-specific constants
pub mod constants;

/// Object store implementations
pub mod object_store;

/// Embedding model implementations
pub mod embedding;

/// Embedding cache implementations
pub mod cache;
