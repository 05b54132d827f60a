//! Application Service Port Interfaces
//!
//! Defines the port interfaces for application layer services.
//! The server layer depends on these traits, not on the concrete pipeline.

use async_trait::async_trait;
use vss_domain::error::Result;
use vss_domain::value_objects::{ScopeRequest, SearchOutcome};

// ============================================================================
// Search Service Interface
// ============================================================================

/// Search Service Interface
///
/// Ranks the images under a request's scope prefix against its query.
#[async_trait]
pub trait SearchServiceInterface: Send + Sync {
    /// Run one search request end to end
    async fn search(&self, request: &ScopeRequest) -> Result<SearchOutcome>;

    /// Load the embedding model ahead of the first request
    async fn warm_up(&self) -> Result<()>;
}
