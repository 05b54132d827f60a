//! End-to-end tests of the search pipeline over test doubles

use std::sync::Arc;
use std::time::Duration;

use vss_application::domain_services::FetchPolicy;
use vss_application::{SearchContext, SearchPipeline, SearchServiceInterface, SearchSettings};
use vss_domain::error::Error;
use vss_domain::ports::providers::EmbeddingModelProvider;
use vss_domain::value_objects::{ObjectKey, ScopeRequest};
use vss_providers::cache::MokaEmbeddingCache;
use vss_providers::object_store::InMemoryObjectStore;

use crate::test_doubles::{BrokenModel, CountingModel, Script, ScriptedStore, png};

fn settings() -> SearchSettings {
    SearchSettings {
        fetch: FetchPolicy {
            concurrency: 8,
            max_attempts: 3,
            backoff_base: Duration::from_millis(1),
            jitter: false,
            target_size: 8,
        },
        image_batch_size: 2,
    }
}

fn pipeline(store: ScriptedStore, model: Arc<dyn EmbeddingModelProvider>) -> SearchPipeline {
    let context = SearchContext::with_model(
        Arc::new(store),
        Arc::new(MokaEmbeddingCache::new(64)),
        model,
        settings(),
    );
    SearchPipeline::new(Arc::new(context))
}

fn request(query: &str) -> ScopeRequest {
    ScopeRequest::from_parts("bucket", None, "colors", query).unwrap()
}

fn palette() -> ScriptedStore {
    ScriptedStore::new()
        .with_page_size(2)
        .with_image("colors/red.png", [250, 10, 10])
        .with_image("colors/green.jpg", [10, 250, 10])
        .with_image("colors/blue.jpeg", [10, 10, 250])
        .with_image("colors/orange.png", [250, 120, 0])
        .with_object("colors/", Vec::new())
        .with_object("colors/readme.md", b"palette".to_vec())
}

fn ranked_keys(outcome: &vss_domain::SearchOutcome) -> Vec<&str> {
    outcome.ranking.keys().map(ObjectKey::as_str).collect()
}

#[tokio::test]
async fn ranks_the_collection_against_the_query() {
    let pipeline = pipeline(palette(), Arc::new(CountingModel::new()));

    let outcome = pipeline.search(&request("red")).await.unwrap();

    assert_eq!(
        ranked_keys(&outcome),
        vec![
            "colors/red.png",
            "colors/orange.png",
            "colors/green.jpg",
            "colors/blue.jpeg"
        ]
    );
    assert_eq!(outcome.image_keys.len(), 4);
    assert_eq!(outcome.metrics.total_images, 4);
    assert_eq!(outcome.metrics.candidate_images, 4);
    assert_eq!(outcome.metrics.failed_images, 0);
    assert!(outcome.metrics.total_time >= 0.0);
    assert!(outcome.note.is_none());

    for entry in outcome.ranking.entries() {
        assert_eq!(outcome.image_keys[entry.index], entry.key);
    }
}

#[tokio::test]
async fn ordering_ignores_fetch_completion_order() {
    let names = [
        "colors/red.png",
        "colors/green.jpg",
        "colors/blue.jpeg",
        "colors/orange.png",
    ];
    let mut forward = palette();
    let mut backward = palette();
    for (i, name) in names.iter().enumerate() {
        let slow = Duration::from_millis(4 * (i as u64 + 1));
        let fast = Duration::from_millis(4 * (names.len() - i) as u64);
        forward = forward.with_delay(name, slow);
        backward = backward.with_delay(name, fast);
    }

    let a = pipeline(forward, Arc::new(CountingModel::new()))
        .search(&request("blue"))
        .await
        .unwrap();
    let b = pipeline(backward, Arc::new(CountingModel::new()))
        .search(&request("blue"))
        .await
        .unwrap();

    assert_eq!(a.ranking, b.ranking);
    assert_eq!(a.image_keys, b.image_keys);
}

#[tokio::test]
async fn tolerates_partial_fetch_failures() {
    let store = palette()
        .with_script("colors/green.jpg", Script::Permanent)
        .with_script("colors/blue.jpeg", Script::AlwaysTransient)
        .with_script("colors/red.png", Script::TransientThenOk(2));
    let pipeline = pipeline(store, Arc::new(CountingModel::new()));

    let outcome = pipeline.search(&request("red")).await.unwrap();

    assert_eq!(
        ranked_keys(&outcome),
        vec!["colors/red.png", "colors/orange.png"]
    );
    assert_eq!(outcome.metrics.total_images, 2);
    assert_eq!(outcome.metrics.failed_images, 2);
}

#[tokio::test]
async fn empty_collection_is_an_error() {
    let store = ScriptedStore::new()
        .with_object("colors/", Vec::new())
        .with_object("colors/readme.md", b"nothing here".to_vec());
    let pipeline = pipeline(store, Arc::new(CountingModel::new()));

    let err = pipeline.search(&request("red")).await.unwrap_err();

    assert!(matches!(err, Error::EmptyCollection { .. }));
    assert_eq!(err.to_string(), "No images found in collection colors");
}

#[tokio::test]
async fn all_fetches_failing_is_an_empty_success() {
    let store = ScriptedStore::new()
        .with_object("colors/a.png", b"garbage".to_vec())
        .with_object("colors/b.png", b"more garbage".to_vec());
    let pipeline = pipeline(store, Arc::new(CountingModel::new()));

    let outcome = pipeline.search(&request("red")).await.unwrap();

    assert!(outcome.ranking.is_empty());
    assert!(outcome.image_keys.is_empty());
    assert_eq!(outcome.metrics.candidate_images, 2);
    assert_eq!(outcome.metrics.failed_images, 2);
    assert!(outcome.note.unwrap().contains("all 2 candidate images failed"));
}

#[tokio::test]
async fn degenerate_images_are_excluded() {
    let store = palette().with_image("colors/black.png", [0, 0, 0]);
    let pipeline = pipeline(store, Arc::new(CountingModel::new()));

    let outcome = pipeline.search(&request("green")).await.unwrap();

    assert_eq!(outcome.ranking.len(), 4);
    assert!(outcome.ranking.keys().all(|k| k.as_str() != "colors/black.png"));
    assert_eq!(outcome.metrics.failed_images, 1);
    assert_eq!(outcome.metrics.candidate_images, 5);
}

#[tokio::test]
async fn second_request_is_served_from_cache() {
    let model = Arc::new(CountingModel::new());
    let pipeline = pipeline(palette(), model.clone());

    let first = pipeline.search(&request("red")).await.unwrap();
    let second = pipeline.search(&request("blue")).await.unwrap();

    assert_eq!(first.metrics.cache_hits, 0);
    assert_eq!(second.metrics.cache_hits, 4);
    assert_eq!(model.images_encoded(), 4);
}

#[tokio::test]
async fn cache_keeps_same_named_objects_in_different_buckets_apart() {
    let store = InMemoryObjectStore::new();
    store.put("bucket-a", "c/x.png", png([250, 0, 0]));
    store.put("bucket-a", "c/y.png", png([0, 0, 250]));
    store.put("bucket-b", "c/x.png", png([0, 0, 250]));
    store.put("bucket-b", "c/y.png", png([250, 0, 0]));
    let model = Arc::new(CountingModel::new());
    let context = SearchContext::with_model(
        Arc::new(store),
        Arc::new(MokaEmbeddingCache::new(64)),
        model.clone(),
        settings(),
    );
    let pipeline = SearchPipeline::new(Arc::new(context));
    let red_in = |bucket: &str| ScopeRequest::from_parts(bucket, None, "c", "red").unwrap();

    let a = pipeline.search(&red_in("bucket-a")).await.unwrap();
    let b = pipeline.search(&red_in("bucket-b")).await.unwrap();

    assert_eq!(ranked_keys(&a), vec!["c/x.png", "c/y.png"]);
    assert_eq!(ranked_keys(&b), vec!["c/y.png", "c/x.png"]);
    assert_eq!(b.metrics.cache_hits, 0);
    assert_eq!(model.images_encoded(), 4);

    let again = pipeline.search(&red_in("bucket-b")).await.unwrap();
    assert_eq!(again.metrics.cache_hits, 2);
    assert_eq!(ranked_keys(&again), vec!["c/y.png", "c/x.png"]);
}

#[tokio::test]
async fn model_failure_fails_the_request() {
    let pipeline = pipeline(palette(), Arc::new(BrokenModel));

    let err = pipeline.search(&request("red")).await.unwrap_err();

    assert!(matches!(err, Error::Model { .. }));
}

#[tokio::test]
async fn listing_failure_fails_the_request() {
    let pipeline = pipeline(
        ScriptedStore::new().failing_listing(),
        Arc::new(CountingModel::new()),
    );

    let err = pipeline.search(&request("red")).await.unwrap_err();

    assert!(matches!(err, Error::Listing { .. }));
}

#[tokio::test]
async fn warm_up_loads_the_model() {
    let pipeline = pipeline(palette(), Arc::new(CountingModel::new()));
    pipeline.warm_up().await.unwrap();
    assert!(pipeline.context().is_model_loaded());
}
