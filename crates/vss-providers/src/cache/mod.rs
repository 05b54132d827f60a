//! Embedding Cache Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`NullEmbeddingCache`] | Testing | Stores nothing, every lookup misses |
//! | [`MokaEmbeddingCache`] | Local | Bounded LRU cache shared across requests |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: `NullEmbeddingCache` to force re-encoding
//! - **Production**: `MokaEmbeddingCache`

#[cfg(feature = "cache-moka")]
pub mod moka;
pub mod null;

// Re-export for convenience
#[cfg(feature = "cache-moka")]
pub use moka::MokaEmbeddingCache;
pub use null::NullEmbeddingCache;

// Re-export domain types used by cache providers
pub use vss_domain::ports::providers::CacheStats;
