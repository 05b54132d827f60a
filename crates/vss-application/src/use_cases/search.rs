//! Search Pipeline Use Case
//!
//! Sequences listing, fetching, embedding and ranking for one request.
//! Model initialization runs concurrently with fetch I/O; image and query
//! embedding run concurrently with each other.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info, warn};
use vss_domain::error::{Error, Result};
use vss_domain::value_objects::{
    EmbeddingVector, ObjectKey, RankedResult, ScopeRequest, SearchMetrics, SearchOutcome,
};

use crate::context::SearchContext;
use crate::domain_services::{EmbeddingEngine, KeyLister, ParallelFetcher, rank};
use crate::ports::services::SearchServiceInterface;

/// Where a request currently is in the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Not started
    Idle,
    /// Enumerating candidate keys
    Listing,
    /// Fetching images while the model warms up
    FetchingAndWarmup,
    /// Encoding images and the query
    Embedding,
    /// Scoring and ordering
    Ranking,
    /// Finished with a result
    Done,
    /// Finished with an error
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Listing => "listing",
            Self::FetchingAndWarmup => "fetching+warmup",
            Self::Embedding => "embedding",
            Self::Ranking => "ranking",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Pipeline orchestrator over a shared [`SearchContext`]
#[derive(Clone)]
pub struct SearchPipeline {
    context: Arc<SearchContext>,
}

impl SearchPipeline {
    /// Create a pipeline over the process context
    pub fn new(context: Arc<SearchContext>) -> Self {
        Self { context }
    }

    /// The shared context
    pub fn context(&self) -> &Arc<SearchContext> {
        &self.context
    }

    async fn run(&self, request: &ScopeRequest, started: Instant) -> Result<SearchOutcome> {
        let ctx = &self.context;
        let mut metrics = SearchMetrics::default();

        transition(PipelineState::Idle, PipelineState::Listing);
        let keys = KeyLister::new(Arc::clone(ctx.store()))
            .list(&request.bucket, &request.prefix)
            .await?;
        if keys.is_empty() {
            return Err(Error::empty_collection(request.prefix.trim_end_matches('/')));
        }
        metrics.candidate_images = keys.len();

        transition(PipelineState::Listing, PipelineState::FetchingAndWarmup);
        let fetcher =
            ParallelFetcher::new(Arc::clone(ctx.store()), ctx.settings().fetch.clone());
        let (report, model) = tokio::join!(fetcher.fetch(&request.bucket, &keys), ctx.model());
        let model = model?;
        metrics.failed_images = report.failures.len();

        if report.images.is_empty() {
            let note = format!("all {} candidate images failed to load", keys.len());
            warn!(prefix = %request.prefix, candidates = keys.len(), "{note}");
            return Ok(empty_outcome(metrics, started, note));
        }

        transition(PipelineState::FetchingAndWarmup, PipelineState::Embedding);
        let engine = EmbeddingEngine::new(
            model,
            Arc::clone(ctx.cache()),
            ctx.settings().image_batch_size,
        );
        let (images, query) = tokio::join!(
            engine.embed_images(&request.bucket, &report.images),
            engine.embed_text(&request.query)
        );
        let (images, query) = (images?, query?);
        metrics.cache_hits = images.cache_hits;

        let mut candidates: Vec<(ObjectKey, EmbeddingVector)> =
            Vec::with_capacity(images.vectors.len());
        for (image, vector) in report.images.iter().zip(images.vectors) {
            match vector {
                Ok(vector) => candidates.push((image.key.clone(), vector)),
                Err(e) => {
                    debug!(key = %image.key, error = %e, "Excluding image from ranking");
                    metrics.failed_images += 1;
                }
            }
        }
        metrics.total_images = candidates.len();

        if candidates.is_empty() {
            let note = format!("no usable embeddings among {} candidate images", keys.len());
            warn!(prefix = %request.prefix, "{note}");
            return Ok(empty_outcome(metrics, started, note));
        }

        transition(PipelineState::Embedding, PipelineState::Ranking);
        let ranking = rank(&query, &candidates)?;
        let image_keys = candidates.into_iter().map(|(key, _)| key).collect();

        metrics.total_time = started.elapsed().as_secs_f64();
        transition(PipelineState::Ranking, PipelineState::Done);
        Ok(SearchOutcome {
            image_keys,
            ranking,
            metrics,
            note: None,
        })
    }
}

#[async_trait::async_trait]
impl SearchServiceInterface for SearchPipeline {
    async fn search(&self, request: &ScopeRequest) -> Result<SearchOutcome> {
        let started = Instant::now();
        match self.run(request, started).await {
            Ok(outcome) => {
                info!(
                    bucket = %request.bucket,
                    prefix = %request.prefix,
                    ranked = outcome.ranking.len(),
                    failed = outcome.metrics.failed_images,
                    cache_hits = outcome.metrics.cache_hits,
                    total_time = outcome.metrics.total_time,
                    "Search completed"
                );
                Ok(outcome)
            }
            Err(e) => {
                error!(
                    state = %PipelineState::Failed,
                    bucket = %request.bucket,
                    prefix = %request.prefix,
                    error = %e,
                    "Search failed"
                );
                Err(e)
            }
        }
    }

    async fn warm_up(&self) -> Result<()> {
        self.context.model().await.map(|_| ())
    }
}

fn transition(from: PipelineState, to: PipelineState) {
    debug!(%from, %to, "Pipeline state");
}

fn empty_outcome(mut metrics: SearchMetrics, started: Instant, note: String) -> SearchOutcome {
    metrics.total_time = started.elapsed().as_secs_f64();
    SearchOutcome {
        image_keys: Vec::new(),
        ranking: RankedResult::empty(),
        metrics,
        note: Some(note),
    }
}
