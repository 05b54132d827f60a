//! Application Layer - Visual Search Service
//!
//! Implements the retrieval-and-ranking pipeline on top of the ports
//! defined in `vss-domain`.
//!
//! ## Architecture
//!
//! The application layer:
//! - Contains the pipeline stages (domain services) and the search use case
//! - Declares the provider registries that `vss-providers` fills in
//! - Owns the process-scoped [`SearchContext`]
//! - Has no dependencies on infrastructure or concrete providers
//!
//! ## Pipeline
//!
//! ```text
//! KeyLister → ParallelFetcher ─┐
//!             model warm-up ───┴→ EmbeddingEngine (images ∥ query) → ranker → SearchOutcome
//! ```
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `vss-domain`: For value objects, errors and port traits
//! - Pure Rust libraries for async, image decoding, etc.

pub mod context;
pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use context::{ModelLoader, SearchContext, SearchSettings};
pub use domain_services::*;
pub use ports::*;
pub use use_cases::*;
