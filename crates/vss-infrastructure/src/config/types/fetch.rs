//! Fetch policy configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};
use vss_application::FetchPolicy;
use vss_domain::constants::{
    FETCH_BACKOFF_BASE_MS, FETCH_DEFAULT_CONCURRENCY, FETCH_MAX_ATTEMPTS,
    FETCH_MAX_RECOMMENDED_CONCURRENCY, FETCH_MIN_RECOMMENDED_CONCURRENCY, IMAGE_TARGET_SIZE,
};

/// Fetch configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Maximum in-flight fetches per request
    pub concurrency: usize,

    /// Attempt ceiling per object, first try included
    pub max_attempts: u32,

    /// Base backoff delay in milliseconds
    pub backoff_base_ms: u64,

    /// Randomize backoff delays; turn off for reproducible runs
    pub jitter: bool,

    /// Side length images are resized to before embedding
    pub target_size: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            concurrency: FETCH_DEFAULT_CONCURRENCY,
            max_attempts: FETCH_MAX_ATTEMPTS,
            backoff_base_ms: FETCH_BACKOFF_BASE_MS,
            jitter: true,
            target_size: IMAGE_TARGET_SIZE,
        }
    }
}

impl FetchConfig {
    /// Whether the pool width lies in the range that suits object-store I/O
    ///
    /// Narrower pools leave fetch latency on the table; wider ones tend to
    /// trip store throttling. Outside the range is allowed, only flagged.
    pub fn has_recommended_concurrency(&self) -> bool {
        (FETCH_MIN_RECOMMENDED_CONCURRENCY..=FETCH_MAX_RECOMMENDED_CONCURRENCY)
            .contains(&self.concurrency)
    }

    /// The fetcher policy for these settings
    pub fn to_policy(&self) -> FetchPolicy {
        FetchPolicy {
            concurrency: self.concurrency,
            max_attempts: self.max_attempts,
            backoff_base: Duration::from_millis(self.backoff_base_ms),
            jitter: self.jitter,
            target_size: self.target_size,
        }
    }
}
