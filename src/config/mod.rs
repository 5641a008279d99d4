//! Application configuration and constants.
//!
//! This module provides:
//! - Pipeline constants (page size, retry delay, pool bounds, sentinels)
//! - Request header values sent with every catalog page request
//! - The `Listing` definition for each scraper instance
//! - Database and logging configuration read from the environment

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{ConfigError, DbConfig, Listing, LogFormat, TABLETS};
pub(crate) use types::validate_table_name;
