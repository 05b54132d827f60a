//! Embedding Model Implementations
//!
//! Joint image/text encoders that map both modalities into one vector
//! space.
//!
//! ## Available Providers
//!
//! | Provider | Type | Status |
//! |----------|------|--------|
//! | NullEmbeddingModel | Testing | Complete |
//! | FastEmbedClipModel | Local ML | Complete (optional) |
//!
//! ## Provider Selection Guide
//!
//! - **Development/Testing**: `NullEmbeddingModel`, deterministic and offline
//! - **Production**: `FastEmbedClipModel` (requires `embedding-fastembed`)

#[cfg(feature = "embedding-fastembed")]
pub mod fastembed;
pub mod null;

// Re-export for convenience
#[cfg(feature = "embedding-fastembed")]
pub use fastembed::{ClipModel, FastEmbedClipModel};
pub use null::NullEmbeddingModel;
