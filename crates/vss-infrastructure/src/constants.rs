//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Search-domain constants are defined in `vss_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "vss.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "vss";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "VSS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable that overrides the configured log filter
pub const LOG_FILTER_ENV: &str = "VSS_LOG";

/// File name stem for the rolling log file when none is given
pub const LOG_FILE_STEM: &str = "vss";

// ============================================================================
// PROVIDER DEFAULTS
// ============================================================================

/// Object store used when none is configured
pub const DEFAULT_STORE_PROVIDER: &str = "s3";

/// Embedding model provider used when none is configured
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "fastembed";

/// Embedding cache provider used when the cache is enabled
pub const DEFAULT_CACHE_PROVIDER: &str = "moka";

/// Cache provider used when the cache is disabled
pub const DISABLED_CACHE_PROVIDER: &str = "null";
