//! Job request and response payloads

use serde::{Deserialize, Serialize};
use vss_domain::error::Result;
use vss_domain::value_objects::{ScopeRequest, SearchMetrics, SearchOutcome};

/// A job as delivered by the runtime
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobRequest {
    /// Job payload
    pub input: JobInput,
}

/// Search parameters of a job
///
/// `bucket_name` and `collection_name` are accepted as older spellings of
/// `bucket` and `prefix`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct JobInput {
    /// Store identifier
    #[serde(alias = "bucket_name")]
    pub bucket: String,

    /// Optional scoping segment prepended to the prefix
    #[serde(default)]
    pub user_id: Option<String>,

    /// Collection prefix
    #[serde(alias = "collection_name", default)]
    pub prefix: String,

    /// Free-text query
    pub query: String,
}

impl JobInput {
    /// Validate and build the domain request
    pub fn to_scope_request(&self) -> Result<ScopeRequest> {
        ScopeRequest::from_parts(
            &self.bucket,
            self.user_id.as_deref(),
            &self.prefix,
            &self.query,
        )
    }
}

/// Body of a successful job
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    /// Positions in `image_keys`, best match first
    pub sorted_indices: Vec<usize>,
    /// Processed keys in listing order
    pub image_keys: Vec<String>,
    /// Cosine similarities aligned with `sorted_indices`
    pub similarity_scores: Vec<f32>,
    /// Keys in rank order
    pub sorted_images: Vec<String>,
    /// Why the result is empty, when it is
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Request metrics
    pub metrics: SearchMetrics,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        let ranking = &outcome.ranking;
        Self {
            sorted_indices: ranking.indices().collect(),
            similarity_scores: ranking.scores().collect(),
            sorted_images: ranking.keys().map(ToString::to_string).collect(),
            image_keys: outcome
                .image_keys
                .into_iter()
                .map(|k| k.into_inner())
                .collect(),
            note: outcome.note,
            metrics: outcome.metrics,
        }
    }
}

/// Body of a failed job
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Human-readable failure message
    pub error: String,
}

/// What a job returns
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JobResponse {
    /// The search completed
    Success(SearchResponse),
    /// The search failed
    Failure(ErrorResponse),
}

impl JobResponse {
    /// An error response with `message`
    pub fn error(message: impl Into<String>) -> Self {
        Self::Failure(ErrorResponse {
            error: message.into(),
        })
    }

    /// Whether this is an error response
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failure(_))
    }
}
