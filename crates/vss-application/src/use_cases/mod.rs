//! Use Cases
//!
//! Application services that implement the interfaces in
//! `crate::ports::services`.

/// Search pipeline orchestrator
pub mod search;

pub use search::{PipelineState, SearchPipeline};
