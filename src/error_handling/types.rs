//! Error type definitions.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The connection pool was never established; the run is in degraded mode.
    #[error("Connection pool unavailable: {0}")]
    PoolUnavailable(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),
}

/// Failure to obtain one page of catalog results.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP transport error: {0}")]
    Transport(#[from] ReqwestError),

    /// The body was not the expected JSON document.
    #[error("Malformed page body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The page URL could not be built from the listing's base query.
    #[error("Invalid page URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl FetchError {
    /// Returns `true` when the failure ends pagination instead of being retried.
    ///
    /// Every non-success status is terminal, including transient ones such as
    /// 503; only transport and decode failures are retried. An unparseable base
    /// URL can never succeed and is terminal as well.
    pub fn is_terminal(&self) -> bool {
        matches!(self, FetchError::Status(_) | FetchError::InvalidUrl(_))
    }
}
