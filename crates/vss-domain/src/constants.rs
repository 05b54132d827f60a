//! Domain layer constants
//!
//! Contains constants that are part of the search domain and are used by
//! the application layer. Infrastructure-specific constants remain in
//! `vss_infrastructure::constants`.

// ============================================================================
// LISTING CONSTANTS
// ============================================================================

/// Image extensions accepted by the key lister (matched case-insensitively)
pub const SUPPORTED_IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Key path separator used by object stores
pub const KEY_SEPARATOR: char = '/';

/// Default number of keys requested per listing page
pub const LISTING_PAGE_SIZE: usize = 1000;

// ============================================================================
// FETCH CONSTANTS
// ============================================================================

/// Default width of the fetch worker pool
pub const FETCH_DEFAULT_CONCURRENCY: usize = 32;

/// Lower bound for the recommended fetch pool width
pub const FETCH_MIN_RECOMMENDED_CONCURRENCY: usize = 10;

/// Upper bound for the recommended fetch pool width
pub const FETCH_MAX_RECOMMENDED_CONCURRENCY: usize = 50;

/// Attempt ceiling for a single object (first try included)
pub const FETCH_MAX_ATTEMPTS: u32 = 3;

/// Base backoff delay in milliseconds; attempt `n` waits `base * 2^n`
pub const FETCH_BACKOFF_BASE_MS: u64 = 100;

/// Working resolution images are resized to before embedding
pub const IMAGE_TARGET_SIZE: u32 = 224;

// ============================================================================
// EMBEDDING CONSTANTS
// ============================================================================

/// Default number of images per encoder call
pub const IMAGE_BATCH_SIZE: usize = 32;

/// Norms at or below this value are treated as degenerate
pub const NORM_EPSILON: f32 = 1e-12;

/// Tolerance used when checking that a vector has unit norm
pub const UNIT_NORM_TOLERANCE: f32 = 1e-5;

/// Default capacity of the process-wide embedding cache (entries)
pub const EMBEDDING_CACHE_CAPACITY: usize = 10_000;
