//! Domain Port Interfaces
//!
//! Defines the boundary contracts between the search domain and the
//! external collaborators it consumes. Ports follow the Dependency
//! Inversion Principle:
//! - High-level modules (domain, application) define interfaces
//! - Low-level modules (providers, infrastructure) implement them
//!
//! ## Organization
//!
//! - **providers/** - Object store, embedding model and embedding cache ports

/// External service provider ports
pub mod providers;

// Re-export commonly used port traits for convenience
pub use providers::{
    CacheStats, EmbeddingCacheProvider, EmbeddingModelProvider, ObjectStoreProvider,
};
