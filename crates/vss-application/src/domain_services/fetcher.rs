//! Parallel Fetcher
//!
//! Retrieves and decodes candidate objects with bounded concurrency.
//! Transient store errors are retried with exponential backoff; anything
//! else drops the single item. One bad object never fails the request.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use image::DynamicImage;
use image::imageops::FilterType;
use rand::Rng;
use tracing::{debug, warn};
use vss_domain::constants::{
    FETCH_BACKOFF_BASE_MS, FETCH_DEFAULT_CONCURRENCY, FETCH_MAX_ATTEMPTS, IMAGE_TARGET_SIZE,
};
use vss_domain::error::{Error, Result};
use vss_domain::ports::providers::ObjectStoreProvider;
use vss_domain::value_objects::{ObjectKey, RawImage};

/// Concurrency and retry settings for one fetch run
#[derive(Debug, Clone, PartialEq)]
pub struct FetchPolicy {
    /// Maximum number of in-flight fetches
    pub concurrency: usize,
    /// Attempt ceiling per object, first try included
    pub max_attempts: u32,
    /// Base backoff delay
    pub backoff_base: Duration,
    /// Add uniform jitter in `[0, backoff_base)` to each delay
    pub jitter: bool,
    /// Side length of the square working resolution
    pub target_size: u32,
}

impl Default for FetchPolicy {
    fn default() -> Self {
        Self {
            concurrency: FETCH_DEFAULT_CONCURRENCY,
            max_attempts: FETCH_MAX_ATTEMPTS,
            backoff_base: Duration::from_millis(FETCH_BACKOFF_BASE_MS),
            jitter: true,
            target_size: IMAGE_TARGET_SIZE,
        }
    }
}

impl FetchPolicy {
    /// Delay before retrying after the zero-based `attempt` failed
    ///
    /// `base × 2^attempt`, plus jitter when enabled.
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        let delay = self.backoff_base.saturating_mul(1u32 << attempt.min(16));
        if !self.jitter || self.backoff_base.is_zero() {
            return delay;
        }
        let base_ms = u64::try_from(self.backoff_base.as_millis()).unwrap_or(u64::MAX);
        let jitter_ms = rand::rng().random_range(0..base_ms.max(1));
        delay.saturating_add(Duration::from_millis(jitter_ms))
    }

    /// Pool width actually used for `candidates` items
    pub fn effective_width(&self, candidates: usize) -> usize {
        self.concurrency.min(candidates).max(1)
    }
}

/// An object that could not be fetched or decoded
#[derive(Debug)]
pub struct FetchFailure {
    /// Key of the dropped object
    pub key: ObjectKey,
    /// Listing position of the dropped object
    pub index: usize,
    /// Attempts made before giving up
    pub attempts: u32,
    /// Last error seen
    pub error: Error,
}

/// Backoff delays slept for one object that needed retries
#[derive(Debug, Clone, PartialEq)]
pub struct RetryRecord {
    /// Object key
    pub key: ObjectKey,
    /// Delays in the order they were slept
    pub delays: Vec<Duration>,
}

/// Aggregated result of a fetch run
///
/// `images` and `failures` are sorted by listing position, whatever order
/// the individual fetches completed in.
#[derive(Debug, Default)]
pub struct FetchReport {
    /// Successfully fetched and decoded images
    pub images: Vec<RawImage>,
    /// Dropped objects
    pub failures: Vec<FetchFailure>,
    /// Objects that succeeded or failed only after backing off
    pub retries: Vec<RetryRecord>,
}

impl FetchReport {
    /// Total number of backoff sleeps across all objects
    pub fn backoff_count(&self) -> usize {
        self.retries.iter().map(|r| r.delays.len()).sum()
    }
}

type ItemOutcome = (std::result::Result<RawImage, FetchFailure>, Vec<Duration>);

/// Bounded-concurrency fetcher over an object store
#[derive(Clone)]
pub struct ParallelFetcher {
    store: Arc<dyn ObjectStoreProvider>,
    policy: FetchPolicy,
}

impl ParallelFetcher {
    /// Create a fetcher over `store`
    pub fn new(store: Arc<dyn ObjectStoreProvider>, policy: FetchPolicy) -> Self {
        Self { store, policy }
    }

    /// The policy this fetcher runs with
    pub fn policy(&self) -> &FetchPolicy {
        &self.policy
    }

    /// Fetch and decode every key, tolerating per-item failures
    pub async fn fetch(&self, bucket: &str, keys: &[ObjectKey]) -> FetchReport {
        if keys.is_empty() {
            return FetchReport::default();
        }

        let width = self.policy.effective_width(keys.len());
        debug!(bucket, candidates = keys.len(), width, "Fetching objects");

        let outcomes: Vec<ItemOutcome> = stream::iter(keys.iter().cloned().enumerate())
            .map(|(index, key)| self.fetch_one(bucket, key, index))
            .buffer_unordered(width)
            .collect()
            .await;

        let mut report = FetchReport::default();
        for (outcome, delays) in outcomes {
            let key = match &outcome {
                Ok(image) => &image.key,
                Err(failure) => &failure.key,
            };
            if !delays.is_empty() {
                report.retries.push(RetryRecord {
                    key: key.clone(),
                    delays,
                });
            }
            match outcome {
                Ok(image) => report.images.push(image),
                Err(failure) => {
                    warn!(
                        key = %failure.key,
                        attempts = failure.attempts,
                        error = %failure.error,
                        "Dropping object"
                    );
                    report.failures.push(failure);
                }
            }
        }

        // Completion order is arbitrary; restore listing order.
        report.images.sort_by_key(|image| image.index);
        report.failures.sort_by_key(|failure| failure.index);
        report.retries.sort_by(|a, b| a.key.cmp(&b.key));

        debug!(
            fetched = report.images.len(),
            failed = report.failures.len(),
            backoffs = report.backoff_count(),
            "Fetch finished"
        );
        report
    }

    /// Fetch, decode and resize one object
    async fn fetch_one(&self, bucket: &str, key: ObjectKey, index: usize) -> ItemOutcome {
        let mut delays = Vec::new();
        let mut attempt = 0;

        let bytes = loop {
            match self.store.get(bucket, &key).await {
                Ok(bytes) => break bytes,
                Err(error) if error.is_transient() && attempt + 1 < self.policy.max_attempts => {
                    let delay = self.policy.backoff_delay(attempt);
                    debug!(
                        key = %key,
                        attempt = attempt + 1,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %error,
                        "Transient fetch error, backing off"
                    );
                    tokio::time::sleep(delay).await;
                    delays.push(delay);
                    attempt += 1;
                }
                Err(error) => {
                    let failure = FetchFailure {
                        key,
                        index,
                        attempts: attempt + 1,
                        error,
                    };
                    return (Err(failure), delays);
                }
            }
        };

        let target = self.policy.target_size;
        let decode_key = key.clone();
        let decoded = tokio::task::spawn_blocking(move || {
            decode_and_resize(&decode_key, &bytes, target)
        })
        .await
        .unwrap_or_else(|e| Err(Error::internal(format!("decode task failed: {e}"))));

        match decoded {
            Ok(image) => (Ok(RawImage::new(key, index, image)), delays),
            Err(error) => {
                let failure = FetchFailure {
                    key,
                    index,
                    attempts: attempt + 1,
                    error,
                };
                (Err(failure), delays)
            }
        }
    }
}

/// Decode object bytes and bring the raster to `target × target`
///
/// The image is scaled to cover the square and center-cropped, matching
/// the preprocessing CLIP-style encoders expect.
pub fn decode_and_resize(key: &ObjectKey, bytes: &[u8], target: u32) -> Result<DynamicImage> {
    let image =
        image::load_from_memory(bytes).map_err(|e| Error::decode(key.as_str(), e.to_string()))?;
    if image.width() == 0 || image.height() == 0 {
        return Err(Error::decode(key.as_str(), "image has zero width or height"));
    }
    if image.width() == target && image.height() == target {
        return Ok(image);
    }
    Ok(image.resize_to_fill(target, target, FilterType::Triangle))
}
