//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - Logger (plain or JSON output)
//! - HTTP client carrying the catalog request headers
//! - Batch persister over the connection pool (degraded when the database is unavailable)

mod client;
mod logger;

use log::error;

use crate::config::{DbConfig, DEFAULT_DB_TABLE};
use crate::storage::{init_pool, BatchPersister, ConnectionPool};

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the batch persister from the environment.
///
/// Never fails. Missing or invalid configuration, or a database that cannot
/// be reached, produces a persister in degraded mode: extraction still runs
/// and `save` becomes a logged no-op.
pub async fn init_persister() -> BatchPersister {
    let (pool, table) = match DbConfig::from_env() {
        Ok(config) => (init_pool(&config).await, config.tablename),
        Err(e) => {
            error!("Database configuration error: {e}. Skipping database operations.");
            (
                ConnectionPool::unavailable(e.to_string()),
                DEFAULT_DB_TABLE.to_string(),
            )
        }
    };

    BatchPersister::new(pool, table).unwrap_or_else(|e| {
        error!("{e}. Skipping database operations.");
        BatchPersister::disabled(e.to_string())
    })
}
