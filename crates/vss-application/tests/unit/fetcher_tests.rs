//! Tests for the parallel fetcher's retry and partial-failure handling

use std::sync::Arc;
use std::time::Duration;

use vss_application::domain_services::{FetchPolicy, ParallelFetcher};
use vss_domain::error::Error;
use vss_domain::value_objects::ObjectKey;

use crate::test_doubles::{Script, ScriptedStore};

fn fast_policy() -> FetchPolicy {
    FetchPolicy {
        concurrency: 4,
        max_attempts: 3,
        backoff_base: Duration::from_millis(1),
        jitter: false,
        target_size: 8,
    }
}

fn keys(names: &[&str]) -> Vec<ObjectKey> {
    names.iter().map(|n| ObjectKey::from(*n)).collect()
}

#[tokio::test]
async fn retries_transient_errors_then_succeeds() {
    let store = Arc::new(
        ScriptedStore::new()
            .with_image("c/flaky.png", [10, 20, 30])
            .with_script("c/flaky.png", Script::TransientThenOk(2)),
    );
    let fetcher = ParallelFetcher::new(store.clone(), fast_policy());

    let report = fetcher.fetch("bucket", &keys(&["c/flaky.png"])).await;

    assert_eq!(report.images.len(), 1);
    assert!(report.failures.is_empty());
    assert_eq!(store.get_count("c/flaky.png"), 3);
    assert_eq!(report.backoff_count(), 2);
    assert_eq!(
        report.retries[0].delays,
        vec![Duration::from_millis(1), Duration::from_millis(2)]
    );
}

#[tokio::test]
async fn gives_up_after_the_attempt_ceiling() {
    let store = Arc::new(
        ScriptedStore::new()
            .with_image("c/down.png", [1, 1, 1])
            .with_script("c/down.png", Script::AlwaysTransient),
    );
    let fetcher = ParallelFetcher::new(store.clone(), fast_policy());

    let report = fetcher.fetch("bucket", &keys(&["c/down.png"])).await;

    assert!(report.images.is_empty());
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].attempts, 3);
    assert_eq!(store.get_count("c/down.png"), 3);
    assert_eq!(report.backoff_count(), 2);
}

#[tokio::test]
async fn permanent_errors_are_not_retried() {
    let store = Arc::new(
        ScriptedStore::new()
            .with_image("c/denied.png", [1, 1, 1])
            .with_script("c/denied.png", Script::Permanent),
    );
    let fetcher = ParallelFetcher::new(store.clone(), fast_policy());

    let report = fetcher.fetch("bucket", &keys(&["c/denied.png"])).await;

    assert_eq!(report.failures.len(), 1);
    assert_eq!(store.get_count("c/denied.png"), 1);
    assert_eq!(report.backoff_count(), 0);
}

#[tokio::test]
async fn decode_failures_drop_the_item_without_retry() {
    let store = Arc::new(
        ScriptedStore::new()
            .with_object("c/corrupt.png", b"\x89PNG but not really".to_vec())
            .with_image("c/ok.png", [5, 5, 5]),
    );
    let fetcher = ParallelFetcher::new(store.clone(), fast_policy());

    let report = fetcher
        .fetch("bucket", &keys(&["c/corrupt.png", "c/ok.png"]))
        .await;

    assert_eq!(report.images.len(), 1);
    assert_eq!(report.images[0].key.as_str(), "c/ok.png");
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(report.failures[0].error, Error::Decode { .. }));
    assert_eq!(store.get_count("c/corrupt.png"), 1);
}

#[tokio::test]
async fn partial_failures_keep_the_rest() {
    let mut store = ScriptedStore::new();
    let names = ["c/0.png", "c/1.png", "c/2.png", "c/3.png", "c/4.png"];
    for (i, name) in names.iter().enumerate() {
        store = store.with_image(name, [i as u8 * 40, 0, 0]);
    }
    let store = Arc::new(
        store
            .with_script("c/1.png", Script::Permanent)
            .with_script("c/3.png", Script::Permanent),
    );
    let fetcher = ParallelFetcher::new(store, fast_policy());

    let report = fetcher.fetch("bucket", &keys(&names)).await;

    let fetched: Vec<&str> = report.images.iter().map(|i| i.key.as_str()).collect();
    assert_eq!(fetched, vec!["c/0.png", "c/2.png", "c/4.png"]);
    let failed: Vec<usize> = report.failures.iter().map(|f| f.index).collect();
    assert_eq!(failed, vec![1, 3]);
}

#[tokio::test]
async fn results_follow_listing_order_not_completion_order() {
    let names = ["c/a.png", "c/b.png", "c/c.png", "c/d.png"];
    let mut store = ScriptedStore::new();
    for (i, name) in names.iter().enumerate() {
        // Earlier keys finish last.
        store = store
            .with_image(name, [i as u8, 0, 0])
            .with_delay(name, Duration::from_millis(5 * (names.len() - i) as u64));
    }
    let fetcher = ParallelFetcher::new(Arc::new(store), fast_policy());

    let report = fetcher.fetch("bucket", &keys(&names)).await;

    let indices: Vec<usize> = report.images.iter().map(|i| i.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn images_are_resized_to_the_target() {
    let store = Arc::new(ScriptedStore::new().with_image("c/a.png", [9, 9, 9]));
    let policy = FetchPolicy {
        target_size: 32,
        ..fast_policy()
    };
    let fetcher = ParallelFetcher::new(store, policy);

    let report = fetcher.fetch("bucket", &keys(&["c/a.png"])).await;

    assert_eq!(report.images[0].dimensions(), (32, 32));
}

#[tokio::test]
async fn empty_input_fetches_nothing() {
    let fetcher = ParallelFetcher::new(Arc::new(ScriptedStore::new()), fast_policy());

    let report = fetcher.fetch("bucket", &[]).await;

    assert!(report.images.is_empty());
    assert!(report.failures.is_empty());
}
