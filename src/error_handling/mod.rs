//! Error handling.
//!
//! This module provides the typed errors raised by each stage of a run.
//! Failures are split by how the pipeline reacts to them:
//! - **Retried**: transport and decode failures while fetching a page
//! - **Terminal**: a non-success HTTP status ends pagination for the run
//! - **Degrading**: configuration or connection failures disable persistence
//! - **Fatal**: logger or HTTP client initialization failures abort the process

mod types;

// Re-export public API
pub use types::{DatabaseError, FetchError, InitializationError};
