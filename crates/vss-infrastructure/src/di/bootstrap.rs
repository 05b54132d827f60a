//! Search context bootstrap
//!
//! Turns an [`AppConfig`] into the process-scoped [`SearchContext`]. The
//! object store and cache are resolved eagerly; the model is loaded on
//! first use (or by [`init_search_context`] when warm-up is requested).

use std::sync::Arc;

use tracing::{info, warn};
use vss_domain::constants::{
    FETCH_MAX_RECOMMENDED_CONCURRENCY, FETCH_MIN_RECOMMENDED_CONCURRENCY,
};
use vss_application::SearchContext;
use vss_domain::error::Result;

use crate::config::AppConfig;
use crate::di::provider_resolvers::{model_loader, resolve_cache, resolve_store};
use crate::utils::TimedOperation;

/// Build the search context described by `config`
pub fn build_search_context(config: &AppConfig) -> Result<Arc<SearchContext>> {
    if !config.fetch.has_recommended_concurrency() {
        warn!(
            concurrency = config.fetch.concurrency,
            min = FETCH_MIN_RECOMMENDED_CONCURRENCY,
            max = FETCH_MAX_RECOMMENDED_CONCURRENCY,
            "Fetch concurrency is outside the recommended range"
        );
    }

    let store = resolve_store(&config.store)?;
    let cache = resolve_cache(&config.cache)?;
    let loader = model_loader(&config.embedding);

    info!(
        store = store.provider_name(),
        cache = cache.provider_name(),
        embedding = %config.embedding.provider,
        concurrency = config.fetch.concurrency,
        "Search context configured"
    );

    Ok(Arc::new(SearchContext::new(
        store,
        cache,
        loader,
        config.search_settings(),
    )))
}

/// Build the search context and optionally load the model right away
pub async fn init_search_context(config: &AppConfig, warm_up: bool) -> Result<Arc<SearchContext>> {
    let timer = TimedOperation::start("search context");
    let context = build_search_context(config)?;
    let mut warm_up_ms = None;
    if warm_up {
        let warm_timer = TimedOperation::start("model warm-up");
        context.model().await?;
        warm_up_ms = Some(warm_timer.finish());
    }
    info!(
        warm = context.is_model_loaded(),
        warm_up_ms,
        elapsed_ms = timer.finish(),
        "Search context ready"
    );
    Ok(context)
}
