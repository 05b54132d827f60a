//! Object Store Provider Port
//!
//! Consumed as an opaque capability: list objects under a prefix, page by
//! page, and fetch object bytes by key. Authentication and connection
//! pooling stay inside the implementation.

use crate::error::Result;
use crate::value_objects::{ObjectKey, ObjectPage};
use async_trait::async_trait;

/// Remote Object Store Interface
///
/// # Error classes
///
/// Implementations must map their failures onto
/// [`Error::store_transient`](crate::error::Error::store_transient) for
/// errors expected to clear on retry (timeouts, throttling, 5xx) and
/// [`Error::store_permanent`](crate::error::Error::store_permanent) for the
/// rest (missing object, access denied). Listing failures may use either;
/// the key lister treats every listing error as fatal.
///
/// # Example
///
/// ```ignore
/// use vss_domain::ports::providers::ObjectStoreProvider;
///
/// let mut token = None;
/// loop {
///     let page = store.list_page("photos", "summer/", token.as_deref()).await?;
///     for entry in &page.entries {
///         let bytes = store.get("photos", &entry.key).await?;
///     }
///     match page.next_token {
///         Some(next) => token = Some(next),
///         None => break,
///     }
/// }
/// ```
#[async_trait]
pub trait ObjectStoreProvider: Send + Sync {
    /// List one page of objects under `prefix`
    ///
    /// `continuation` is `None` for the first page and the previous page's
    /// `next_token` afterwards. Entries are returned in store order.
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation: Option<&str>,
    ) -> Result<ObjectPage>;

    /// Read the full contents of one object
    async fn get(&self, bucket: &str, key: &ObjectKey) -> Result<Vec<u8>>;

    /// Get the name/identifier of this provider implementation
    ///
    /// # Returns
    /// A string identifier for the provider (e.g., "s3", "filesystem", "memory")
    fn provider_name(&self) -> &str;
}
