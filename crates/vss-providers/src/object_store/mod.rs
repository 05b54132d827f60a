//! Object Store Provider Implementations
//!
//! ## Available Providers
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | [`FilesystemObjectStore`] | Local | Buckets are subdirectories of a root directory |
//! | [`InMemoryObjectStore`] | Testing | Objects held in process memory |
//! | `S3ObjectStore` | Cloud | AWS S3 or any S3-compatible endpoint (`store-s3`) |

#[cfg(feature = "store-filesystem")]
pub mod filesystem;
#[cfg(feature = "store-memory")]
pub mod in_memory;
#[cfg(feature = "store-s3")]
pub mod s3;

#[cfg(feature = "store-filesystem")]
pub use filesystem::FilesystemObjectStore;
#[cfg(feature = "store-memory")]
pub use in_memory::InMemoryObjectStore;
#[cfg(feature = "store-s3")]
pub use s3::S3ObjectStore;

use vss_domain::value_objects::{ObjectEntry, ObjectPage};

/// Cut one page out of a key-sorted listing
///
/// The continuation token is the last key of the previous page, so paging
/// stays correct if objects are added between calls.
#[cfg(any(feature = "store-filesystem", feature = "store-memory"))]
pub(crate) fn paginate(
    sorted: Vec<ObjectEntry>,
    continuation: Option<&str>,
    page_size: usize,
) -> ObjectPage {
    let page_size = page_size.max(1);
    let mut remaining = sorted
        .into_iter()
        .skip_while(|e| continuation.is_some_and(|after| e.key.as_str() <= after))
        .peekable();

    let entries: Vec<ObjectEntry> = remaining.by_ref().take(page_size).collect();
    let next = if remaining.peek().is_some() {
        entries.last().map(|e| e.key.as_str().to_string())
    } else {
        None
    };
    match next {
        Some(token) => ObjectPage::with_next(entries, token),
        None => ObjectPage::last(entries),
    }
}
