//! Catalog fetching.
//!
//! This module provides:
//! - The page schema decoded at the API boundary (`page`)
//! - The `PageSource` seam and its HTTP implementation (`source`)
//! - The paginator that walks the result set page by page (`paginator`)

mod page;
mod paginator;
mod source;

// Re-export public API
pub use page::{RawProduct, SearchPage, SearchResponse};
pub use paginator::{PaginationReport, Paginator, RetryPolicy, StopReason};
pub use source::{HttpPageSource, PageSource};
