//! Tests for the filesystem object store

use std::fs;
use std::path::Path;

use tempfile::TempDir;
use vss_domain::error::Error;
use vss_domain::ports::providers::ObjectStoreProvider;
use vss_domain::value_objects::{ObjectKey, ObjectPage};
use vss_providers::object_store::FilesystemObjectStore;

fn write(root: &Path, relative: &str, bytes: &[u8]) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, bytes).unwrap();
}

fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "catalog/summer/b.png", b"bbb");
    write(dir.path(), "catalog/summer/a.jpg", b"a");
    write(dir.path(), "catalog/summer/deep/c.png", b"cc");
    write(dir.path(), "catalog/winter/d.png", b"d");
    fs::create_dir_all(dir.path().join("catalog/summer/empty")).unwrap();
    dir
}

fn keys(page: &ObjectPage) -> Vec<&str> {
    page.entries.iter().map(|e| e.key.as_str()).collect()
}

#[tokio::test]
async fn lists_files_under_prefix_in_key_order() {
    let dir = fixture();
    let store = FilesystemObjectStore::new(dir.path());

    let page = store.list_page("catalog", "summer/", None).await.unwrap();

    assert_eq!(
        keys(&page),
        vec!["summer/a.jpg", "summer/b.png", "summer/deep/c.png"]
    );
    assert_eq!(page.entries[1].size, 3);
    assert!(page.next_token.is_none());
}

#[tokio::test]
async fn pages_through_large_listings() {
    let dir = fixture();
    let store = FilesystemObjectStore::new(dir.path()).with_page_size(2);

    let first = store.list_page("catalog", "", None).await.unwrap();
    let second = store
        .list_page("catalog", "", first.next_token.as_deref())
        .await
        .unwrap();

    assert_eq!(keys(&first), vec!["summer/a.jpg", "summer/b.png"]);
    assert_eq!(keys(&second), vec!["summer/deep/c.png", "winter/d.png"]);
    assert!(second.next_token.is_none());
}

#[tokio::test]
async fn reads_object_bytes() {
    let dir = fixture();
    let store = FilesystemObjectStore::new(dir.path());

    let bytes = store
        .get("catalog", &ObjectKey::from("summer/b.png"))
        .await
        .unwrap();

    assert_eq!(bytes, b"bbb");
}

#[tokio::test]
async fn missing_object_is_a_permanent_error() {
    let dir = fixture();
    let store = FilesystemObjectStore::new(dir.path());

    let err = store
        .get("catalog", &ObjectKey::from("summer/missing.png"))
        .await
        .unwrap_err();

    assert!(matches!(err, Error::Store { transient: false, .. }));
}

#[tokio::test]
async fn missing_bucket_fails_listing() {
    let dir = fixture();
    let store = FilesystemObjectStore::new(dir.path());

    assert!(store.list_page("nope", "", None).await.is_err());
}

#[tokio::test]
async fn traversal_keys_are_rejected() {
    let dir = fixture();
    write(dir.path(), "secret.png", b"top secret");
    let store = FilesystemObjectStore::new(dir.path());

    let err = store
        .get("catalog", &ObjectKey::from("../secret.png"))
        .await
        .unwrap_err();

    assert!(!err.is_transient());
}
