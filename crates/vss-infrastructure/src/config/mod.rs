//! Configuration
//!
//! Typed configuration sections and the figment-based loader that merges
//! defaults, a TOML file and `VSS_` environment variables.

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, CacheConfig, EmbeddingConfig, FetchConfig, LoggingConfig, StoreConfig};
