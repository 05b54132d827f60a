//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! All adapters live in `vss-providers` and are reached through the linkme
//! registries of `vss-application`; this crate turns configuration into a
//! ready [`SearchContext`](vss_application::SearchContext).
//!
//! ## Module Categories
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`di`] | Provider resolution and search context bootstrap |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//!
//! ### Utilities
//! | Module | Description |
//! |--------|-------------|
//! | [`error_ext`] | Context helpers for foreign errors |
//! | [`utils`] | Timing helpers |

// Linking the provider crate fills the registries
extern crate vss_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use di::bootstrap::{build_search_context, init_search_context};
pub use error_ext::ErrorContext;
pub use utils::TimedOperation;
