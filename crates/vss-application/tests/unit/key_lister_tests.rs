//! Tests for paged key enumeration

use std::sync::Arc;

use futures::TryStreamExt;
use vss_application::domain_services::KeyLister;
use vss_domain::error::Error;
use vss_domain::value_objects::ObjectKey;

use crate::test_doubles::ScriptedStore;

fn keys(names: &[&str]) -> Vec<ObjectKey> {
    names.iter().map(|n| ObjectKey::from(*n)).collect()
}

#[tokio::test]
async fn follows_every_page_in_store_order() {
    let store = Arc::new(
        ScriptedStore::new()
            .with_page_size(2)
            .with_image("c/1.png", [1, 0, 0])
            .with_image("c/2.jpg", [2, 0, 0])
            .with_image("c/3.jpeg", [3, 0, 0])
            .with_image("c/4.png", [4, 0, 0])
            .with_image("c/5.png", [5, 0, 0]),
    );
    let lister = KeyLister::new(store.clone());

    let listed = lister.list("bucket", "c/").await.unwrap();

    assert_eq!(
        listed,
        keys(&["c/1.png", "c/2.jpg", "c/3.jpeg", "c/4.png", "c/5.png"])
    );
    assert_eq!(store.list_page_count(), 3);
}

#[tokio::test]
async fn skips_markers_and_unsupported_extensions() {
    let store = Arc::new(
        ScriptedStore::new()
            .with_object("c/", Vec::new())
            .with_image("c/a.PNG", [1, 1, 1])
            .with_object("c/notes.txt", b"hello".to_vec())
            .with_object("c/sub/", Vec::new())
            .with_image("c/sub/b.JpEg", [1, 1, 1])
            .with_object("c/archive.gif", b"GIF89a".to_vec()),
    );
    let lister = KeyLister::new(store);

    let listed = lister.list("bucket", "c/").await.unwrap();

    assert_eq!(listed, keys(&["c/a.PNG", "c/sub/b.JpEg"]));
}

#[tokio::test]
async fn only_lists_under_the_prefix() {
    let store = Arc::new(
        ScriptedStore::new()
            .with_image("alice/c/a.png", [1, 1, 1])
            .with_image("bob/c/b.png", [1, 1, 1]),
    );
    let lister = KeyLister::new(store);

    let listed = lister.list("bucket", "alice/c/").await.unwrap();

    assert_eq!(listed, keys(&["alice/c/a.png"]));
}

#[tokio::test]
async fn each_call_restarts_the_enumeration() {
    let store = Arc::new(
        ScriptedStore::new()
            .with_page_size(1)
            .with_image("c/a.png", [1, 1, 1])
            .with_image("c/b.png", [1, 1, 1]),
    );
    let lister = KeyLister::new(store);

    let first: Vec<ObjectKey> = lister.keys("bucket", "c/").try_collect().await.unwrap();
    let second: Vec<ObjectKey> = lister.keys("bucket", "c/").try_collect().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[tokio::test]
async fn store_failure_aborts_listing() {
    let store = Arc::new(ScriptedStore::new().failing_listing());
    let lister = KeyLister::new(store);

    let err = lister.list("bucket", "c/").await.unwrap_err();

    assert!(matches!(err, Error::Listing { .. }), "got {err:?}");
    assert!(err.to_string().contains("access denied"));
}
