//! External Provider Ports
//!
//! | Port | Description |
//! |------|-------------|
//! | ObjectStoreProvider | Paged listing and byte reads from a remote store |
//! | EmbeddingModelProvider | Joint image/text encoder |
//! | EmbeddingCacheProvider | Process-wide, capacity-bounded embedding memo |

/// Embedding cache port
pub mod cache;
/// Embedding model port
pub mod embedding;
/// Object store port
pub mod object_store;

// Re-export provider ports for convenience
pub use cache::{CacheStats, EmbeddingCacheProvider};
pub use embedding::EmbeddingModelProvider;
pub use object_store::ObjectStoreProvider;
