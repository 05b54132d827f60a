//! S3 object store provider
//!
//! Lists with `ListObjectsV2` and reads with `GetObject`. Credentials and
//! the default region come from the standard AWS provider chain; the
//! client is built lazily on first use because building it is async.

use std::fmt;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use tokio::sync::OnceCell;
use tracing::debug;
use vss_domain::constants::LISTING_PAGE_SIZE;
use vss_domain::error::{Error, Result};
use vss_domain::ports::providers::ObjectStoreProvider;
use vss_domain::value_objects::{ObjectEntry, ObjectKey, ObjectPage};

use crate::constants::{S3_MAX_KEYS, S3_TRANSIENT_ERROR_CODES};

/// AWS S3 (or S3-compatible) object store
pub struct S3ObjectStore {
    client: OnceCell<Client>,
    region: Option<String>,
    endpoint: Option<String>,
    page_size: usize,
}

impl S3ObjectStore {
    /// Create a store using the ambient AWS configuration
    pub fn new() -> Self {
        Self {
            client: OnceCell::new(),
            region: None,
            endpoint: None,
            page_size: LISTING_PAGE_SIZE,
        }
    }

    /// Override the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Use a custom endpoint (MinIO, LocalStack); enables path-style URLs
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the listing page size, capped at the S3 maximum
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.clamp(1, S3_MAX_KEYS);
        self
    }

    async fn client(&self) -> &Client {
        self.client
            .get_or_init(|| async {
                let mut loader = aws_config::defaults(BehaviorVersion::latest());
                if let Some(region) = &self.region {
                    loader = loader.region(Region::new(region.clone()));
                }
                let shared = loader.load().await;

                let mut builder = aws_sdk_s3::config::Builder::from(&shared);
                if let Some(endpoint) = &self.endpoint {
                    builder = builder.endpoint_url(endpoint).force_path_style(true);
                }
                debug!(
                    region = ?shared.region(),
                    endpoint = ?self.endpoint,
                    "S3 client configured"
                );
                Client::from_conf(builder.build())
            })
            .await
    }
}

impl Default for S3ObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for S3ObjectStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3ObjectStore")
            .field("region", &self.region)
            .field("endpoint", &self.endpoint)
            .field("page_size", &self.page_size)
            .field("connected", &self.client.initialized())
            .finish()
    }
}

#[async_trait]
impl ObjectStoreProvider for S3ObjectStore {
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation: Option<&str>,
    ) -> Result<ObjectPage> {
        let output = self
            .client()
            .await
            .list_objects_v2()
            .bucket(bucket)
            .prefix(prefix)
            .max_keys(i32::try_from(self.page_size).unwrap_or(1000))
            .set_continuation_token(continuation.map(str::to_string))
            .send()
            .await
            .map_err(|e| classify(&format!("list s3://{bucket}/{prefix}"), e))?;

        let entries = output
            .contents()
            .iter()
            .filter_map(|object| {
                let key = object.key()?;
                let size = object.size().and_then(|s| u64::try_from(s).ok());
                Some(ObjectEntry::new(key, size.unwrap_or(0)))
            })
            .collect();

        let more = output.is_truncated().unwrap_or(false);
        Ok(match output.next_continuation_token() {
            Some(token) if more => ObjectPage::with_next(entries, token),
            _ => ObjectPage::last(entries),
        })
    }

    async fn get(&self, bucket: &str, key: &ObjectKey) -> Result<Vec<u8>> {
        let context = format!("get s3://{bucket}/{key}");
        let output = self
            .client()
            .await
            .get_object()
            .bucket(bucket)
            .key(key.as_str())
            .send()
            .await
            .map_err(|e| classify(&context, e))?;

        let body = output
            .body
            .collect()
            .await
            .map_err(|e| Error::store_transient(format!("{context}: body read failed: {e}")))?;
        Ok(body.into_bytes().to_vec())
    }

    fn provider_name(&self) -> &str {
        "s3"
    }
}

/// Map an SDK error to a transient or permanent store error
///
/// Network failures, timeouts and throttling are transient; service errors
/// such as `NoSuchKey` or `AccessDenied` are permanent.
fn classify<E, R>(context: &str, err: SdkError<E, R>) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: fmt::Debug,
{
    let transient = match &err {
        SdkError::TimeoutError(_) | SdkError::DispatchFailure(_) | SdkError::ResponseError(_) => {
            true
        }
        SdkError::ServiceError(service) => service
            .err()
            .code()
            .is_some_and(|code| S3_TRANSIENT_ERROR_CODES.contains(&code)),
        _ => false,
    };
    let message = format!("{context}: {}", DisplayErrorContext(&err));
    if transient {
        Error::store_transient(message)
    } else {
        Error::store_permanent(message)
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use std::sync::Arc;

use vss_application::ports::registry::{
    OBJECT_STORE_PROVIDERS, ObjectStoreConfig, ObjectStoreEntry,
};

#[linkme::distributed_slice(OBJECT_STORE_PROVIDERS)]
static S3_STORE: ObjectStoreEntry = ObjectStoreEntry {
    name: "s3",
    description: "AWS S3 or S3-compatible endpoint (credentials from the AWS chain)",
    factory: |config: &ObjectStoreConfig| {
        let mut store = S3ObjectStore::new().with_page_size(config.page_size);
        if let Some(region) = &config.region {
            store = store.with_region(region.clone());
        }
        if let Some(endpoint) = &config.endpoint {
            store = store.with_endpoint(endpoint.clone());
        }
        Ok(Arc::new(store))
    },
};
