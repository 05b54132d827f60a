//! Provider Constants
//!
//! Constants specific to provider implementations. These are separated from
//! domain constants (which live in vss-domain) and infrastructure constants.

// ============================================================================
// EMBEDDING PROVIDER CONSTANTS
// ============================================================================

/// Null embedding provider dimension (matches CLIP ViT-B/32)
pub const EMBEDDING_DIMENSION_NULL: usize = 512;

/// CLIP ViT-B/32 embedding dimension
pub const EMBEDDING_DIMENSION_CLIP_VIT_B32: usize = 512;

/// Default model name for the FastEmbed provider
pub const FASTEMBED_DEFAULT_MODEL: &str = "clip-vit-b-32";

/// Capacity of the FastEmbed actor's request channel
pub const FASTEMBED_CHANNEL_CAPACITY: usize = 100;

/// Cache directory name under the user cache dir for downloaded weights
pub const MODEL_CACHE_DIR_NAME: &str = "vss/models";

// ============================================================================
// OBJECT STORE CONSTANTS
// ============================================================================

/// Upper bound accepted by S3 for `max-keys`
pub const S3_MAX_KEYS: usize = 1000;

/// S3 error codes that are worth retrying
pub const S3_TRANSIENT_ERROR_CODES: &[&str] = &[
    "RequestTimeout",
    "SlowDown",
    "Throttling",
    "ThrottlingException",
    "InternalError",
    "ServiceUnavailable",
];

// ============================================================================
// CACHE PROVIDER CONSTANTS
// ============================================================================

/// Default embedding cache capacity when none is configured
pub const CACHE_DEFAULT_CAPACITY: usize = vss_domain::constants::EMBEDDING_CACHE_CAPACITY;
