//! Filesystem object store provider
//!
//! Serves a directory tree as an object store: each bucket is a
//! subdirectory of the root, each object key is a `/`-separated path
//! relative to its bucket directory.
//!
//! ## Example
//!
//! ```ignore
//! use vss_providers::object_store::FilesystemObjectStore;
//!
//! let store = FilesystemObjectStore::new("/srv/images");
//! // bucket "catalog", key "summer/dress.png" -> /srv/images/catalog/summer/dress.png
//! ```

use std::io;
use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use tracing::trace;
use vss_domain::constants::{KEY_SEPARATOR, LISTING_PAGE_SIZE};
use vss_domain::error::{Error, Result};
use vss_domain::ports::providers::ObjectStoreProvider;
use vss_domain::value_objects::{ObjectEntry, ObjectKey, ObjectPage};
use walkdir::WalkDir;

use super::paginate;

/// Object store over a local directory tree
#[derive(Debug, Clone)]
pub struct FilesystemObjectStore {
    root: PathBuf,
    page_size: usize,
}

impl FilesystemObjectStore {
    /// Create a store rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            page_size: LISTING_PAGE_SIZE,
        }
    }

    /// Set the listing page size
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// The root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn bucket_dir(&self, bucket: &str) -> Result<PathBuf> {
        let relative = safe_relative(bucket)
            .filter(|p| p.components().count() == 1)
            .ok_or_else(|| Error::invalid_argument(format!("invalid bucket name '{bucket}'")))?;
        Ok(self.root.join(relative))
    }

    fn object_path(&self, bucket: &str, key: &ObjectKey) -> Result<PathBuf> {
        let relative = safe_relative(key.as_str())
            .ok_or_else(|| Error::store_permanent(format!("invalid object key '{key}'")))?;
        Ok(self.bucket_dir(bucket)?.join(relative))
    }
}

#[async_trait]
impl ObjectStoreProvider for FilesystemObjectStore {
    async fn list_page(
        &self,
        bucket: &str,
        prefix: &str,
        continuation: Option<&str>,
    ) -> Result<ObjectPage> {
        let dir = self.bucket_dir(bucket)?;
        let prefix = prefix.to_string();
        let token = continuation.map(str::to_string);
        let page_size = self.page_size;

        tokio::task::spawn_blocking(move || {
            let entries = walk_bucket(&dir, &prefix)?;
            trace!(bucket_dir = %dir.display(), matched = entries.len(), "Walked bucket");
            Ok(paginate(entries, token.as_deref(), page_size))
        })
        .await
        .map_err(|e| Error::internal(format!("listing task failed: {e}")))?
    }

    async fn get(&self, bucket: &str, key: &ObjectKey) -> Result<Vec<u8>> {
        let path = self.object_path(bucket, key)?;
        tokio::fs::read(&path)
            .await
            .map_err(|e| classify_io(&format!("read '{key}'"), &e))
    }

    fn provider_name(&self) -> &str {
        "filesystem"
    }
}

/// All files under `dir` whose key starts with `prefix`, sorted by key
fn walk_bucket(dir: &Path, prefix: &str) -> Result<Vec<ObjectEntry>> {
    if !dir.is_dir() {
        return Err(Error::store_permanent(format!(
            "bucket directory '{}' does not exist",
            dir.display()
        )));
    }

    let mut entries = Vec::new();
    for item in WalkDir::new(dir).follow_links(true) {
        let item = item.map_err(|e| {
            let message = format!("walk '{}': {e}", dir.display());
            match e.into_io_error() {
                Some(io_err) => classify_io(&message, &io_err),
                None => Error::store_permanent(message),
            }
        })?;
        if !item.file_type().is_file() {
            continue;
        }
        let Some(key) = key_for(dir, item.path()) else {
            continue;
        };
        if !key.starts_with(prefix) {
            continue;
        }
        let size = item.metadata().map(|m| m.len()).unwrap_or(0);
        entries.push(ObjectEntry::new(key, size));
    }

    entries.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(entries)
}

/// Relative path of `path` under `dir`, joined with `/`
fn key_for(dir: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(dir).ok()?;
    let parts: Option<Vec<&str>> = relative
        .components()
        .map(|c| match c {
            Component::Normal(part) => part.to_str(),
            _ => None,
        })
        .collect();
    let separator = KEY_SEPARATOR.to_string();
    Some(parts?.join(&separator))
}

/// Turn a key into a relative path, refusing anything that escapes it
fn safe_relative(key: &str) -> Option<PathBuf> {
    let mut path = PathBuf::new();
    for part in key.split(KEY_SEPARATOR) {
        match part {
            "" | "." => {}
            ".." => return None,
            part if Path::new(part).is_absolute() => return None,
            part => path.push(part),
        }
    }
    (!path.as_os_str().is_empty()).then_some(path)
}

fn classify_io(context: &str, err: &io::Error) -> Error {
    let message = format!("{context}: {err}");
    match err.kind() {
        io::ErrorKind::TimedOut
        | io::ErrorKind::Interrupted
        | io::ErrorKind::WouldBlock
        | io::ErrorKind::ConnectionReset
        | io::ErrorKind::ConnectionAborted => Error::store_transient(message),
        _ => Error::store_permanent(message),
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
static FILESYSTEM_STORE: ObjectStoreEntry = ObjectStoreEntry {
    name: "filesystem",
    description: "Local directory tree (one subdirectory per bucket)",
    factory: |config: &ObjectStoreConfig| {
        let root = config
            .root
            .clone()
            .ok_or_else(|| "filesystem store requires store.root".to_string())?;
        Ok(Arc::new(
            FilesystemObjectStore::new(root).with_page_size(config.page_size),
        ))
    },
};
