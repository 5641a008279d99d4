//! Configuration constants.
//!
//! This module defines the operational parameters of a scrape run: paging,
//! retry timing, HTTP timeouts, connection pool bounds and the sentinel values
//! written when a catalog item is missing a field.

use std::time::Duration;

/// Number of products requested per page (the `rows` parameter of the base query).
pub const PAGE_SIZE: u64 = 96;

/// Fixed pause before retrying a page that failed with a transport or decode error.
pub const RETRY_DELAY: Duration = Duration::from_secs(5);

// Network operation timeouts
/// Per-request timeout in seconds
pub const REQUEST_TIMEOUT_SECS: u64 = 30;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 10;

// Connection pool bounds
/// Connections kept open by the pool
pub const DB_POOL_MIN_CONNECTIONS: u32 = 1;
/// Upper bound on pooled connections, sized for several scraper processes
/// sharing one database rather than for parallelism within a run.
pub const DB_POOL_MAX_CONNECTIONS: u32 = 100;
/// How long a caller waits for a pooled connection before giving up
pub const DB_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

// Database defaults
/// Default PostgreSQL port
pub const DEFAULT_DB_PORT: u16 = 5432;
/// Default target table when `DB_TABLE` is not set
pub const DEFAULT_DB_TABLE: &str = "test";

/// Largest number of rows sent in one INSERT statement.
///
/// PostgreSQL caps a statement at 65535 bind parameters; with ten columns per
/// row this stays well below the limit.
pub const MAX_ROWS_PER_STATEMENT: usize = 1000;

/// Hours added to UTC to produce the capture timestamp (store-local time).
pub const CAPTURE_UTC_OFFSET_HOURS: i64 = 3;
/// Format of the `datetime` column; minutes and seconds are always zero.
pub const CAPTURE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:00:00";

// Sentinels for missing catalog fields
/// Title written when `nameEn` is missing
pub const NO_NAME: &str = "No Name Available";
/// Processor attribute written when `featureEnProcessorCore` is missing
pub const NO_PROCESSOR_INFO: &str = "No Processor Info Available";
/// Link written when `productUrl` is missing
pub const NO_URL: &str = "No URL Available";
/// Brand written when the brand list is missing or empty
pub const NO_BRAND: &str = "No Brand Available";
