//! Domain Value Objects
//!
//! Immutable value objects that flow through the search pipeline.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`ObjectKey`] | Identifier of one remote object within a bucket |
//! | [`CacheKey`] | Bucket-qualified object key used by the embedding cache |
//! | [`ScopeRequest`] | Store, scope prefix and query for one invocation |
//! | [`RawImage`] | Decoded raster image tagged with its key |
//! | [`EmbeddingVector`] | Unit-norm embedding of an image or query |
//! | [`RankedResult`] | Keys ordered by similarity to the query |
//! | [`SearchMetrics`] | Timing and counts for one request |

/// Embedding vectors
pub mod embedding;
/// Decoded images
pub mod image;
/// Object store identifiers and listing pages
pub mod object;
/// Ranking results
pub mod ranking;
/// Request scope
pub mod request;
/// Search outcome and metrics
pub mod search;

// Re-export commonly used value objects
pub use embedding::EmbeddingVector;
pub use image::RawImage;
pub use object::{CacheKey, ObjectEntry, ObjectKey, ObjectPage};
pub use ranking::{RankedEntry, RankedResult};
pub use request::ScopeRequest;
pub use search::{SearchMetrics, SearchOutcome};
