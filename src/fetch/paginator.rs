//! Offset pagination over a catalog listing.
//!
//! The paginator is a small state machine:
//!
//! ```text
//! Fetching(offset) --page with products, total not reached--> Fetching(offset + page_size)
//! Fetching(offset) --transport/decode error--> Retrying(offset) --fixed delay--> Fetching(offset)
//! Fetching(offset) --non-200 status | empty page | total reached--> Stopped
//! ```
//!
//! Pages are fetched strictly in sequence. Retrying never advances the offset
//! and is unbounded: a listing that keeps failing at the transport level keeps
//! being retried every `RetryPolicy::delay`.

use std::fmt;
use std::time::Duration;

use log::{info, warn};
use tokio_retry::strategy::FixedInterval;

use crate::config::{Listing, RETRY_DELAY};
use crate::error_handling::FetchError;
use crate::extract::{extract_page, Clock, SystemClock};
use crate::storage::ProductRecord;

use super::source::PageSource;

/// Delay schedule between attempts at a failing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Pause before each retry; constant, no backoff growth.
    pub delay: Duration,
}

impl RetryPolicy {
    /// Retries immediately; for tests.
    pub const NO_DELAY: RetryPolicy = RetryPolicy {
        delay: Duration::ZERO,
    };

    /// Unbounded sequence of retry delays.
    pub fn strategy(&self) -> impl Iterator<Item = Duration> {
        FixedInterval::new(self.delay)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy { delay: RETRY_DELAY }
    }
}

/// Why pagination ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The server answered with a non-200 status; the run ends without retrying.
    HttpStatus {
        /// Offset of the refused page
        offset: u64,
        /// Status code returned
        status: u16,
    },
    /// A failure that can never succeed on retry, such as an invalid page URL
    /// from a `PageSource` that builds its URLs per request. `HttpPageSource`
    /// validates its base URL up front and never stops this way.
    Terminal {
        /// Offset of the failed page
        offset: u64,
        /// Error description
        error: String,
    },
    /// A page came back with no products.
    EmptyPage {
        /// Offset of the empty page
        offset: u64,
    },
    /// As many records as the server reported have been collected.
    TotalReached {
        /// Server-reported total
        total: u64,
    },
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::HttpStatus { offset, status } => {
                write!(f, "HTTP status {status} at index {offset}")
            }
            StopReason::Terminal { offset, error } => write!(f, "{error} at index {offset}"),
            StopReason::EmptyPage { offset } => write!(f, "no more products at index {offset}"),
            StopReason::TotalReached { total } => write!(f, "fetched all {total} products"),
        }
    }
}

/// Outcome of walking a listing.
#[derive(Debug)]
pub struct PaginationReport {
    /// Every record extracted, in page order
    pub records: Vec<ProductRecord>,
    /// Pages that returned a decoded body (including the final empty one)
    pub pages_fetched: usize,
    /// Retry cycles performed after transport or decode failures
    pub retries: usize,
    /// Why the walk ended
    pub stop_reason: StopReason,
}

enum PagerState {
    Fetching { offset: u64 },
    Retrying { offset: u64, error: FetchError },
    Stopped(StopReason),
}

/// Walks a listing from offset 0 until the end of results.
pub struct Paginator<S> {
    source: S,
    listing: Listing,
    retry: RetryPolicy,
    clock: Box<dyn Clock>,
}

impl<S: PageSource> Paginator<S> {
    /// Creates a paginator with the default 5 second retry delay and the wall clock.
    pub fn new(source: S, listing: Listing) -> Self {
        Paginator {
            source,
            listing,
            retry: RetryPolicy::default(),
            clock: Box::new(SystemClock),
        }
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Replaces the clock used for capture timestamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Fetches every page and extracts every item.
    ///
    /// Stops on the first non-200 status, on the first empty page, or once the
    /// accumulated record count reaches the server-reported total, checked
    /// in that order.
    pub async fn run(&self) -> PaginationReport {
        let mut records: Vec<ProductRecord> = Vec::new();
        let mut pages_fetched = 0usize;
        let mut retries = 0usize;
        let mut delays = self.retry.strategy();
        let mut state = PagerState::Fetching { offset: 0 };

        let stop_reason = loop {
            state = match state {
                PagerState::Fetching { offset } => match self.source.fetch_page(offset).await {
                    Err(FetchError::Status(status)) => {
                        warn!(
                            "Failed to fetch data at index {}, status code: {}",
                            offset, status
                        );
                        PagerState::Stopped(StopReason::HttpStatus { offset, status })
                    }
                    // Not reachable through `HttpPageSource`; guards other sources
                    // against retrying a URL that can never parse.
                    Err(error) if error.is_terminal() => {
                        warn!("Failed to fetch data at index {}: {}", offset, error);
                        PagerState::Stopped(StopReason::Terminal {
                            offset,
                            error: error.to_string(),
                        })
                    }
                    Err(error) => PagerState::Retrying { offset, error },
                    Ok(page) => {
                        pages_fetched += 1;
                        let (products, total) = page.into_parts();

                        if products.is_empty() {
                            info!("No more products found at index {}. Stopping.", offset);
                            PagerState::Stopped(StopReason::EmptyPage { offset })
                        } else {
                            records.extend(extract_page(
                                &products,
                                &self.listing,
                                self.clock.as_ref(),
                            ));
                            info!(
                                "Fetched {} products at index {} ({}/{} collected)",
                                products.len(),
                                offset,
                                records.len(),
                                total
                            );

                            if records.len() as u64 >= total {
                                info!("Fetched all {} products.", total);
                                PagerState::Stopped(StopReason::TotalReached { total })
                            } else {
                                PagerState::Fetching {
                                    offset: offset + self.listing.page_size,
                                }
                            }
                        }
                    }
                },
                PagerState::Retrying { offset, error } => {
                    retries += 1;
                    let delay = delays.next().unwrap_or(self.retry.delay);
                    warn!(
                        "An error occurred at index {}: {}. Retrying in {:.1}s",
                        offset,
                        error,
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                    PagerState::Fetching { offset }
                }
                PagerState::Stopped(reason) => break reason,
            };
        };

        PaginationReport {
            records,
            pages_fetched,
            retries,
            stop_reason,
        }
    }
}
