//! catalog_scraper library: catalog pagination, extraction and batched persistence
//!
//! This library walks a product-catalog search API page by page, normalizes
//! every listed item into a flat `ProductRecord`, and inserts the whole run
//! into PostgreSQL in one transaction for downstream price and stock tracking.
//!
//! # Example
//!
//! ```no_run
//! use catalog_scraper::{run_scrape, TABLETS};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let report = run_scrape(TABLETS).await?;
//! println!("Fetched {} products over {} pages",
//!          report.records_fetched, report.pages_fetched);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod storage;

// Re-export public API
pub use config::{DbConfig, Listing, LogFormat, TABLETS};
pub use error_handling::{DatabaseError, FetchError, InitializationError};
pub use run::{run_pipeline, run_scrape, ScrapeReport};

// Internal run module (contains the fetch-extract-persist cycle)
mod run {
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Listing;
    use crate::fetch::{HttpPageSource, PageSource, Paginator, StopReason};
    use crate::initialization::{init_client, init_persister};
    use crate::storage::{BatchPersister, SaveOutcome};

    /// Results of one fetch-extract-persist cycle.
    #[derive(Debug, Clone)]
    pub struct ScrapeReport {
        /// Number of records extracted across all pages
        pub records_fetched: usize,
        /// Number of pages that returned a decoded body
        pub pages_fetched: usize,
        /// Retry cycles after transport or decode failures
        pub retries: usize,
        /// Why pagination ended
        pub stop_reason: StopReason,
        /// What happened to the batch
        pub save: SaveOutcome,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Runs one full cycle for `listing` against the live search API.
    ///
    /// Reads database settings from the environment; when they are missing or
    /// the database is unreachable the run continues in degraded mode and the
    /// records are only logged.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be built or the
    /// listing's base URL is invalid. Fetch and database failures are
    /// recovered and reported in the `ScrapeReport`.
    pub async fn run_scrape(listing: Listing) -> Result<ScrapeReport> {
        let client = init_client().context("Failed to initialize HTTP client")?;
        let source = HttpPageSource::new(client, &listing)
            .context("Failed to build search URL for listing")?;
        let persister = init_persister().await;

        Ok(run_pipeline(Paginator::new(source, listing), &persister).await)
    }

    /// Walks every page with `paginator`, then hands all records to
    /// `persister` in a single call.
    pub async fn run_pipeline<S: PageSource>(
        paginator: Paginator<S>,
        persister: &BatchPersister,
    ) -> ScrapeReport {
        let start = Instant::now();

        let report = paginator.run().await;
        info!(
            "Pagination finished: {} ({} records, {} pages, {} retries)",
            report.stop_reason,
            report.records.len(),
            report.pages_fetched,
            report.retries
        );

        let save = persister.save(&report.records).await;

        ScrapeReport {
            records_fetched: report.records.len(),
            pages_fetched: report.pages_fetched,
            retries: report.retries,
            stop_reason: report.stop_reason,
            save,
            elapsed_seconds: start.elapsed().as_secs_f64(),
        }
    }
}
