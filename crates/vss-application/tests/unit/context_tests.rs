//! Tests for one-time model initialization

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use vss_application::{ModelLoader, SearchContext, SearchSettings};
use vss_domain::error::Error;
use vss_domain::ports::providers::EmbeddingModelProvider;
use vss_providers::cache::NullEmbeddingCache;

use crate::test_doubles::{CountingModel, ScriptedStore};

fn context(loader: ModelLoader) -> SearchContext {
    SearchContext::new(
        Arc::new(ScriptedStore::new()),
        Arc::new(NullEmbeddingCache::new()),
        loader,
        SearchSettings::default(),
    )
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_callers_share_one_initialization() {
    let loads = Arc::new(AtomicUsize::new(0));
    let counter = loads.clone();
    let loader: ModelLoader = Arc::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(Duration::from_millis(50));
        Ok(Arc::new(CountingModel::new()) as Arc<dyn EmbeddingModelProvider>)
    });
    let ctx = Arc::new(context(loader));
    assert!(!ctx.is_model_loaded());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let ctx = ctx.clone();
            tokio::spawn(async move { ctx.model().await.map(|m| m.model_name().to_string()) })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), "pixel-rgb");
    }

    assert_eq!(loads.load(Ordering::SeqCst), 1);
    assert!(ctx.is_model_loaded());
}

#[tokio::test]
async fn failed_initialization_is_retried_later() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let loader: ModelLoader = Arc::new(move || {
        if counter.fetch_add(1, Ordering::SeqCst) == 0 {
            Err(Error::model("weights not downloaded"))
        } else {
            Ok(Arc::new(CountingModel::new()) as Arc<dyn EmbeddingModelProvider>)
        }
    });
    let ctx = context(loader);

    assert!(matches!(ctx.model().await, Err(Error::Model { .. })));
    assert!(!ctx.is_model_loaded());
    assert!(ctx.model().await.is_ok());
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn preloaded_model_is_returned_without_loading() {
    let ctx = SearchContext::with_model(
        Arc::new(ScriptedStore::new()),
        Arc::new(NullEmbeddingCache::new()),
        Arc::new(CountingModel::new()),
        SearchSettings::default(),
    );

    assert!(ctx.is_model_loaded());
    assert_eq!(ctx.model().await.unwrap().provider_name(), "counting");
}
