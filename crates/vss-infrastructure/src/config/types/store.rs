//! Object store configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use vss_application::ports::registry::ObjectStoreConfig;
use vss_domain::constants::LISTING_PAGE_SIZE;

use crate::constants::DEFAULT_STORE_PROVIDER;

/// Object store configuration
///
/// S3 credentials are never read from here; they come from the standard
/// AWS environment chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Registered provider name (`s3`, `filesystem`, `memory`)
    pub provider: String,

    /// Root directory for the filesystem store
    pub root: Option<PathBuf>,

    /// Region override for S3
    pub region: Option<String>,

    /// Custom endpoint for S3-compatible stores
    pub endpoint: Option<String>,

    /// Keys requested per listing page
    pub page_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_STORE_PROVIDER.to_string(),
            root: None,
            region: None,
            endpoint: None,
            page_size: LISTING_PAGE_SIZE,
        }
    }
}

impl StoreConfig {
    /// Registry configuration for this store
    pub fn to_registry(&self) -> ObjectStoreConfig {
        let mut config = ObjectStoreConfig::new(&self.provider).with_page_size(self.page_size);
        if let Some(root) = &self.root {
            config = config.with_root(root.clone());
        }
        if let Some(region) = &self.region {
            config = config.with_region(region.clone());
        }
        if let Some(endpoint) = &self.endpoint {
            config = config.with_endpoint(endpoint.clone());
        }
        config
    }
}
