//! Composition root
//!
//! ```text
//! AppConfig → resolvers → linkme registries → Arc<dyn Provider> → SearchContext
//! ```

pub mod bootstrap;
pub mod provider_resolvers;

pub use bootstrap::{build_search_context, init_search_context};
pub use provider_resolvers::{model_loader, resolve_cache, resolve_store};
