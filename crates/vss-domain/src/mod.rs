//! # Visual Search Service - Domain Layer
//!
//! Core types, errors and provider ports of the visual search pipeline.
//! This crate has no knowledge of concrete stores, models or runtimes.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Keys, images, embeddings, rankings, metrics |
//! | [`ports`] | Object store, embedding model and cache contracts |
//! | [`error`] | Domain error type and `Result` alias |
//! | [`constants`] | Pipeline defaults |

/// Domain layer constants
pub mod constants;
/// Error handling types
pub mod error;
/// Provider ports
pub mod ports;
/// Value objects
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    CacheKey, EmbeddingVector, ObjectEntry, ObjectKey, ObjectPage, RankedEntry, RankedResult,
    RawImage, ScopeRequest, SearchMetrics, SearchOutcome,
};
