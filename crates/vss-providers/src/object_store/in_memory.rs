//! In-memory object store provider
//!
//! Keeps buckets in process memory. Data is lost on restart; useful for
//! development, demos and tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use vss_domain::constants::LISTING_PAGE_SIZE;
use vss_domain::error::{Error, Result};
use vss_domain::ports::providers::ObjectStoreProvider;
use vss_domain::value_objects::{ObjectEntry, ObjectKey, ObjectPage};

use super::paginate;

type Bucket = BTreeMap<String, Arc<Vec<u8>>>;

/// In-memory object store
///
/// Buckets are created on first `put`. Listing is in key order.
#[derive(Debug, Clone)]
pub struct InMemoryObjectStore {
    buckets: Arc<DashMap<String, Bucket>>,
    page_size: usize,
}

impl InMemoryObjectStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            buckets: Arc::new(DashMap::new()),
            page_size: LISTING_PAGE_SIZE,
        }
    }

    /// Set the listing page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Store an object, replacing any previous content at `key`
    pub fn put(&self, bucket: &str, key: impl Into<String>, bytes: Vec<u8>) {
        self.buckets
            .entry(bucket.to_string())
            .or_default()
            .insert(key.into(), Arc::new(bytes));
    }

    /// Remove an object; returns whether it existed
    pub fn remove(&self, bucket: &str, key: &str) -> bool {
        self.buckets
            .get_mut(bucket)
            .is_some_and(|mut b| b.remove(key).is_some())
    }

    /// Number of objects in `bucket`
    pub fn object_count(&self, bucket: &str) -> usize {
        self.buckets.get(bucket).map_or(0, |b| b.len())
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObjectStoreProvider for InMemoryObjectStore {
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation: Option<&str>,
    ) -> Result<ObjectPage> {
        let objects = self
            .buckets
            .get(bucket)
            .ok_or_else(|| Error::store_permanent(format!("no such bucket '{bucket}'")))?;
        let matching: Vec<ObjectEntry> = objects
            .range(prefix.to_string()..)
            .take_while(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| ObjectEntry::new(k.as_str(), v.len() as u64))
            .collect();
        Ok(paginate(matching, continuation, self.page_size))
    }

    async fn get(&self, bucket: &str, key: &ObjectKey) -> Result<Vec<u8>> {
        self.buckets
            .get(bucket)
            .and_then(|b| b.get(key.as_str()).map(|v| v.as_ref().clone()))
            .ok_or_else(|| Error::store_permanent(format!("no such key '{key}' in '{bucket}'")))
    }

    fn provider_name(&self) -> &str {
        "memory"
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use vss_application::ports::registry::{
    OBJECT_STORE_PROVIDERS, ObjectStoreConfig, ObjectStoreEntry,
};

#[linkme::distributed_slice(OBJECT_STORE_PROVIDERS)]
static MEMORY_STORE: ObjectStoreEntry = ObjectStoreEntry {
    name: "memory",
    description: "In-process object store (empty at startup, for tests and demos)",
    factory: |config: &ObjectStoreConfig| {
        Ok(Arc::new(
            InMemoryObjectStore::new().with_page_size(config.page_size),
        ))
    },
};
