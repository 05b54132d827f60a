//! Request scope

use serde::{Deserialize, Serialize};

use crate::constants::KEY_SEPARATOR;
use crate::error::{Error, Result};

/// Value Object: Scope Request
///
/// Store identifier, scope prefix and query text for one invocation.
/// Constructed once per request and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRequest {
    /// Store (bucket) identifier
    pub bucket: String,
    /// Effective prefix, always ending with the key separator
    pub prefix: String,
    /// Free-text search query
    pub query: String,
}

impl ScopeRequest {
    /// Build a request from its raw parts
    ///
    /// The effective prefix is the non-empty segments of
    /// `[user_id, prefix]` joined by `/` with exactly one trailing `/`.
    pub fn from_parts(
        bucket: &str,
        user_id: Option<&str>,
        prefix: &str,
        query: &str,
    ) -> Result<Self> {
        let bucket = bucket.trim();
        if bucket.is_empty() {
            return Err(Error::invalid_argument("bucket must not be empty"));
        }
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::invalid_argument("query must not be empty"));
        }

        let prefix = scope_prefix(user_id, prefix);
        if prefix.is_empty() {
            return Err(Error::invalid_argument(
                "scope prefix must not be empty (set prefix or user_id)",
            ));
        }

        Ok(Self {
            bucket: bucket.to_string(),
            prefix,
            query: query.to_string(),
        })
    }
}

/// Join scope segments into a listing prefix
pub fn scope_prefix(user_id: Option<&str>, prefix: &str) -> String {
    let segments: Vec<&str> = user_id
        .into_iter()
        .chain(std::iter::once(prefix))
        .map(|s| s.trim().trim_matches(KEY_SEPARATOR))
        .filter(|s| !s.is_empty())
        .collect();

    if segments.is_empty() {
        return String::new();
    }
    let mut joined = segments.join("/");
    joined.push(KEY_SEPARATOR);
    joined
}
