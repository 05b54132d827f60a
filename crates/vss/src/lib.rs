//! # Visual Search Service
//!
//! Ranks the images stored under an object-store prefix by their
//! similarity to a free-text query, using a joint vision-language
//! embedding model.
//!
//! ## Example
//!
//! ```ignore
//! use vss::infrastructure::{ConfigLoader, init_search_context};
//! use vss::application::SearchPipeline;
//! use vss::domain::value_objects::ScopeRequest;
//!
//! let config = ConfigLoader::new().load()?;
//! let context = init_search_context(&config, true).await?;
//! let pipeline = SearchPipeline::new(context);
//!
//! let request = ScopeRequest::from_parts("media", Some("u1"), "summer", "red dress")?;
//! let outcome = pipeline.search(&request).await?;
//! for entry in outcome.ranking.top(5) {
//!     println!("{:.3} {}", entry.score, entry.key);
//! }
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Value objects, errors and provider ports
//! - `application` - Lister, fetcher, embedding engine, ranker and pipeline
//! - `infrastructure` - Configuration, logging and bootstrap
//! - `providers` - Object stores, embedding models and caches
//! - `server` - Job request boundary and runtime loop

/// Domain layer - value objects, errors and ports
pub mod domain {
    pub use vss_domain::*;
}

/// Application layer - pipeline stages and the search use case
pub mod application {
    pub use vss_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
pub mod infrastructure {
    pub use vss_infrastructure::*;
}

/// Provider implementations
pub mod providers {
    pub use vss_providers::*;
}

/// Job boundary and runtime
pub mod server {
    pub use vss_server::*;
}

// Re-export the main entry point at the crate root
pub use server::{RunOptions, run};
