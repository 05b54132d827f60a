//! Job handler
//!
//! The request boundary. Nothing escapes it: parse errors, pipeline
//! errors and panics all become error responses.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tracing::{error, warn};
use vss_application::ports::services::SearchServiceInterface;
use vss_domain::error::Result;

use crate::job::{JobRequest, JobResponse, SearchResponse};

/// Answers jobs with a search service
#[derive(Clone)]
pub struct JobHandler {
    search: Arc<dyn SearchServiceInterface>,
}

impl JobHandler {
    /// Create a handler over `search`
    pub fn new(search: Arc<dyn SearchServiceInterface>) -> Self {
        Self { search }
    }

    /// Handle one raw JSON job
    pub async fn handle_json(&self, raw: &str) -> JobResponse {
        match serde_json::from_str::<JobRequest>(raw) {
            Ok(request) => self.handle(&request).await,
            Err(e) => {
                warn!(error = %e, "Rejected malformed job");
                JobResponse::error(format!("Invalid job request: {e}"))
            }
        }
    }

    /// Handle one parsed job
    pub async fn handle(&self, request: &JobRequest) -> JobResponse {
        match AssertUnwindSafe(self.try_handle(request))
            .catch_unwind()
            .await
        {
            Ok(Ok(response)) => JobResponse::Success(response),
            Ok(Err(e)) => JobResponse::error(e.to_string()),
            Err(panic) => {
                let message = panic_message(panic.as_ref());
                error!(panic = %message, "Search panicked");
                JobResponse::error(format!("Internal error: {message}"))
            }
        }
    }

    /// Load the model ahead of the first job
    pub async fn warm_up(&self) -> Result<()> {
        self.search.warm_up().await
    }

    async fn try_handle(&self, request: &JobRequest) -> Result<SearchResponse> {
        let scope = request.input.to_scope_request()?;
        let outcome = self.search.search(&scope).await?;
        Ok(outcome.into())
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
