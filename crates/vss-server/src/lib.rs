//! # Visual Search Service - Job Boundary
//!
//! Turns job requests into search calls and search results into job
//! responses. Every request gets a response: failures, including panics,
//! come back as `{"error": "..."}`.
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`JobRequest`] | Incoming `{"input": {...}}` payload |
//! | [`JobResponse`] | Success body or error body |
//! | [`JobHandler`] | Total-catch request handler |
//!
//! ## Runtime
//!
//! [`run`] loads configuration, initializes logging, builds the search
//! context and then either answers a single test job or serves JSON lines
//! from stdin until EOF.

pub mod handler;
pub mod init;
pub mod job;
pub mod runtime;

pub use handler::JobHandler;
pub use init::{RunOptions, run};
pub use job::{ErrorResponse, JobInput, JobRequest, JobResponse, SearchResponse};
pub use runtime::serve_lines;
