//! Database connection pool management.
//!
//! The pool is built once per process from `DbConfig`. Construction never
//! fails: an unreachable or misconfigured database yields
//! `ConnectionPool::Unavailable`, and the run continues in degraded mode with
//! persistence skipped.

use std::time::Duration;

use log::{error, info};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::{
    DbConfig, DB_ACQUIRE_TIMEOUT, DB_POOL_MAX_CONNECTIONS, DB_POOL_MIN_CONNECTIONS,
};

/// Handle to the process-wide PostgreSQL pool.
///
/// Cloning is cheap; clones share the same underlying pool.
#[derive(Debug, Clone)]
pub enum ConnectionPool {
    /// Pool connected and ready to hand out connections.
    Available(PgPool),
    /// Pool could not be established; persistence is disabled for this run.
    Unavailable {
        /// Why the pool is unavailable, for logging.
        reason: String,
    },
}

impl ConnectionPool {
    /// Creates an unavailable handle, e.g. when configuration is missing.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        ConnectionPool::Unavailable {
            reason: reason.into(),
        }
    }

    /// Returns `true` if records can be persisted.
    pub fn is_available(&self) -> bool {
        matches!(self, ConnectionPool::Available(_))
    }

    /// Returns the underlying pool when available.
    pub fn pg_pool(&self) -> Option<&PgPool> {
        match self {
            ConnectionPool::Available(pool) => Some(pool),
            ConnectionPool::Unavailable { .. } => None,
        }
    }
}

/// Builds PostgreSQL connect options from the configuration.
pub fn connect_options(config: &DbConfig) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .database(&config.dbname)
        .username(&config.user)
        .password(&config.password)
}

fn pool_options(acquire_timeout: Duration) -> PgPoolOptions {
    PgPoolOptions::new()
        .min_connections(DB_POOL_MIN_CONNECTIONS)
        .max_connections(DB_POOL_MAX_CONNECTIONS)
        .acquire_timeout(acquire_timeout)
}

/// Initializes the connection pool, establishing the first connection eagerly.
///
/// Any connection failure is logged and returned as
/// `ConnectionPool::Unavailable` rather than as an error.
pub async fn init_pool(config: &DbConfig) -> ConnectionPool {
    match pool_options(DB_ACQUIRE_TIMEOUT).connect_with(connect_options(config)).await {
        Ok(pool) => {
            info!(
                "Connected to PostgreSQL at {}:{}/{}",
                config.host, config.port, config.dbname
            );
            ConnectionPool::Available(pool)
        }
        Err(e) => {
            error!("Error connecting to PostgreSQL: {e}. Skipping database operations.");
            ConnectionPool::unavailable(e.to_string())
        }
    }
}

/// Initializes the pool without connecting.
///
/// Connections are opened on first use, so failures surface at write time
/// (after at most `acquire_timeout`) instead of at startup. No idle
/// connections are kept warm.
pub fn init_pool_lazy(config: &DbConfig, acquire_timeout: Duration) -> ConnectionPool {
    ConnectionPool::Available(
        pool_options(acquire_timeout)
            .min_connections(0)
            .connect_lazy_with(connect_options(config)),
    )
}
