//! Key Lister
//!
//! Enumerates candidate image keys under a scope prefix, following the
//! store's paged listing until it is exhausted.

use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use tracing::{debug, trace};
use vss_domain::error::{Error, Result};
use vss_domain::ports::providers::ObjectStoreProvider;
use vss_domain::value_objects::{ObjectEntry, ObjectKey};

/// Listing cursor: `Some(None)` before the first page, `Some(Some(token))`
/// between pages, `None` once the store reported the last page.
type Cursor = Option<Option<String>>;

/// Key lister over an object store
///
/// Every call to [`KeyLister::keys`] starts a fresh enumeration, so the
/// sequence is lazy and restartable per call. Store order is preserved.
#[derive(Clone)]
pub struct KeyLister {
    store: Arc<dyn ObjectStoreProvider>,
}

impl KeyLister {
    /// Create a lister over `store`
    pub fn new(store: Arc<dyn ObjectStoreProvider>) -> Self {
        Self { store }
    }

    /// Lazily stream candidate keys under `prefix`
    ///
    /// Directory markers and keys without a supported image extension are
    /// skipped. The first store error ends the stream with
    /// [`Error::Listing`]; there is no partial listing.
    pub fn keys<'a>(
        &'a self,
        bucket: &'a str,
        prefix: &'a str,
    ) -> BoxStream<'a, Result<ObjectKey>> {
        let start: Cursor = Some(None);

        stream::try_unfold(start, move |cursor| self.next_page(bucket, prefix, cursor))
            .map_ok(|entries| stream::iter(entries.into_iter().map(Ok::<_, Error>)))
            .try_flatten()
            .try_filter_map(|entry| async move { Ok(accept(entry)) })
            .boxed()
    }

    /// Fetch the page at `cursor` and compute the cursor after it
    async fn next_page(
        &self,
        bucket: &str,
        prefix: &str,
        cursor: Cursor,
    ) -> Result<Option<(Vec<ObjectEntry>, Cursor)>> {
        let Some(token) = cursor else {
            return Ok(None);
        };

        let page = self
            .store
            .list_page(bucket, prefix, token.as_deref())
            .await
            .map_err(|e| into_listing_error(bucket, prefix, e))?;

        trace!(
            bucket,
            prefix,
            entries = page.entries.len(),
            more = page.next_token.is_some(),
            "Listed page"
        );

        // An empty or repeated token would restart or loop the enumeration.
        let next: Cursor = page
            .next_token
            .filter(|t| !t.is_empty() && Some(t) != token.as_ref())
            .map(Some);
        Ok(Some((page.entries, next)))
    }

    /// Collect every candidate key under `prefix`, in store order
    pub async fn list(&self, bucket: &str, prefix: &str) -> Result<Vec<ObjectKey>> {
        let keys: Vec<ObjectKey> = self.keys(bucket, prefix).try_collect().await?;
        debug!(bucket, prefix, count = keys.len(), "Listed candidate keys");
        Ok(keys)
    }
}

/// Keep image objects, drop folder markers and other file types
fn accept(entry: ObjectEntry) -> Option<ObjectKey> {
    if entry.is_directory_marker() {
        return None;
    }
    if !entry.key.has_supported_extension() {
        trace!(key = %entry.key, "Skipping unsupported object");
        return None;
    }
    Some(entry.key)
}

fn into_listing_error(bucket: &str, prefix: &str, error: Error) -> Error {
    match error {
        Error::Listing { .. } => error,
        other => Error::listing_with_source(
            format!("bucket '{bucket}', prefix '{prefix}': {other}"),
            other,
        ),
    }
}
