//! Search outcome and metrics

use serde::{Deserialize, Serialize};

use super::{ObjectKey, RankedResult};

/// Value Object: Search Metrics
///
/// Produced once per request and never mutated after being returned.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetrics {
    /// Wall-clock time of the whole request, in seconds
    pub total_time: f64,
    /// Images that were fetched, decoded and embedded
    pub total_images: usize,
    /// Candidates dropped along the way
    pub failed_images: usize,
    /// Keys produced by the lister
    pub candidate_images: usize,
    /// Image embeddings served from the cache
    pub cache_hits: usize,
}

/// Everything a successful request returns
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Successfully processed keys, in listing order
    pub image_keys: Vec<ObjectKey>,
    /// Ranking over `image_keys`; entry indices point into it
    pub ranking: RankedResult,
    /// Request metrics
    pub metrics: SearchMetrics,
    /// Set when the result is empty for a reason worth telling the caller
    pub note: Option<String>,
}
