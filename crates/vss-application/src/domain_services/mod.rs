//! Domain Services
//!
//! The stages of the retrieval-and-ranking pipeline.
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`KeyLister`] | Paged enumeration of candidate image keys |
//! | [`ParallelFetcher`] | Bounded-concurrency fetch and decode with retry |
//! | [`EmbeddingEngine`] | Cached, batched, normalized encoding |
//! | [`rank`] | Cosine scoring and stable ordering |

/// Cached image and query embedding
pub mod embedding_engine;
/// Concurrent fetch and decode
pub mod fetcher;
/// Candidate key enumeration
pub mod key_lister;
/// Similarity ranking
pub mod ranker;

pub use embedding_engine::{EmbeddingEngine, ImageEmbeddings};
pub use fetcher::{
    FetchFailure, FetchPolicy, FetchReport, ParallelFetcher, RetryRecord, decode_and_resize,
};
pub use key_lister::KeyLister;
pub use ranker::rank;
