//! Object store identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::{KEY_SEPARATOR, SUPPORTED_IMAGE_EXTENSIONS};

/// Value Object: Object Key
///
/// Opaque, unique name of one object within a store. Keys are produced by
/// the key lister and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Wrap a raw key
    pub fn new<S: Into<String>>(key: S) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the key, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Lowercased extension of the final path segment, if any
    pub fn extension(&self) -> Option<String> {
        let name = self.0.rsplit(KEY_SEPARATOR).next()?;
        let (stem, ext) = name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }

    /// Whether the key names a directory marker rather than an object
    pub fn is_directory_marker(&self) -> bool {
        self.0.is_empty() || self.0.ends_with(KEY_SEPARATOR)
    }

    /// Whether the key carries one of the supported image extensions
    pub fn has_supported_extension(&self) -> bool {
        self.extension()
            .is_some_and(|ext| SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str()))
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ObjectKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for ObjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Value Object: Cache Key
///
/// Store-wide identity of one object: the bucket it lives in plus its key.
/// Keys are only unique within a bucket, so embeddings are cached under
/// both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CacheKey {
    /// Bucket the object was fetched from
    pub bucket: String,
    /// Object key within the bucket
    pub key: ObjectKey,
}

impl CacheKey {
    /// Qualify `key` with the bucket it belongs to
    pub fn new(bucket: impl Into<String>, key: impl Into<ObjectKey>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{KEY_SEPARATOR}{}", self.bucket, self.key)
    }
}

/// One listed object: key plus size in bytes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectEntry {
    /// Object key
    pub key: ObjectKey,
    /// Object size in bytes
    pub size: u64,
}

impl ObjectEntry {
    /// Create a listing entry
    pub fn new<K: Into<ObjectKey>>(key: K, size: u64) -> Self {
        Self {
            key: key.into(),
            size,
        }
    }

    /// Folder placeholders some stores emit for prefixes
    pub fn is_directory_marker(&self) -> bool {
        self.key.is_directory_marker()
    }
}

/// One page of a listing
///
/// `next_token` is `Some` while the store has more results; passing it to
/// the next `list_page` call continues the enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectPage {
    /// Entries on this page, in store order
    pub entries: Vec<ObjectEntry>,
    /// Continuation token for the next page
    pub next_token: Option<String>,
}

impl ObjectPage {
    /// The final page of a listing
    pub fn last(entries: Vec<ObjectEntry>) -> Self {
        Self {
            entries,
            next_token: None,
        }
    }

    /// A page followed by more results
    pub fn with_next(entries: Vec<ObjectEntry>, token: impl Into<String>) -> Self {
        Self {
            entries,
            next_token: Some(token.into()),
        }
    }
}
