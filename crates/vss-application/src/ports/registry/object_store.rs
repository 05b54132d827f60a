//! Object Store Registry
//!
//! Auto-registration system for object stores using linkme distributed slices.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use vss_domain::constants::LISTING_PAGE_SIZE;
use vss_domain::ports::providers::ObjectStoreProvider;

/// Configuration for object store creation
#[derive(Debug, Clone)]
pub struct ObjectStoreConfig {
    /// Provider name (e.g., "s3", "filesystem", "memory")
    pub provider: String,
    /// Root directory for directory-backed stores
    pub root: Option<PathBuf>,
    /// Region for cloud stores
    pub region: Option<String>,
    /// Custom endpoint URL (S3-compatible services)
    pub endpoint: Option<String>,
    /// Maximum keys per listing page
    pub page_size: usize,
    /// Additional provider-specific configuration
    pub extra: HashMap<String, String>,
}

impl Default for ObjectStoreConfig {
    fn default() -> Self {
        Self {
            provider: String::new(),
            root: None,
            region: None,
            endpoint: None,
            page_size: LISTING_PAGE_SIZE,
            extra: HashMap::new(),
        }
    }
}

impl ObjectStoreConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Set the root directory
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    /// Set the region
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set the endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the listing page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Registry entry for object stores
pub struct ObjectStoreEntry {
    /// Unique provider name (e.g., "s3", "filesystem")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create provider instance
    pub factory: fn(&ObjectStoreConfig) -> Result<Arc<dyn ObjectStoreProvider>, String>,
}

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static OBJECT_STORE_PROVIDERS: [ObjectStoreEntry] = [..];

/// Resolve object store by name from registry
pub fn resolve_object_store(
    config: &ObjectStoreConfig,
) -> Result<Arc<dyn ObjectStoreProvider>, String> {
    let provider_name = &config.provider;

    for entry in OBJECT_STORE_PROVIDERS {
        if entry.name == provider_name {
            return (entry.factory)(config);
        }
    }

    let available: Vec<&str> = OBJECT_STORE_PROVIDERS.iter().map(|e| e.name).collect();

    Err(format!(
        "Unknown object store provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered object stores as (name, description) tuples
pub fn list_object_stores() -> Vec<(&'static str, &'static str)> {
    OBJECT_STORE_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
