//! Page sources.
//!
//! `PageSource` is the seam between the paginator and the network. The
//! production implementation issues GET requests against the listing's base
//! query; tests substitute scripted sources.

use std::future::Future;

use log::debug;
use reqwest::StatusCode;
use url::Url;

use crate::config::Listing;
use crate::error_handling::FetchError;

use super::page::SearchPage;

/// Something that can return the page of results starting at an offset.
pub trait PageSource {
    /// Fetches and decodes the page whose first item is at `offset`.
    fn fetch_page(&self, offset: u64) -> impl Future<Output = Result<SearchPage, FetchError>> + Send;
}

/// Fetches pages from the search API over one reused HTTP client.
#[derive(Debug, Clone)]
pub struct HttpPageSource {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpPageSource {
    /// Creates a source for `listing`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` if the listing's base query is not a
    /// valid URL.
    pub fn new(client: reqwest::Client, listing: &Listing) -> Result<Self, FetchError> {
        Self::with_base_url(client, listing.base_url)
    }

    /// Creates a source over an arbitrary base query.
    pub fn with_base_url(client: reqwest::Client, base_url: &str) -> Result<Self, FetchError> {
        Ok(HttpPageSource {
            client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Base query with `start={offset}` appended.
    pub fn page_url(&self, offset: u64) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("start", &offset.to_string());
        url
    }
}

impl PageSource for HttpPageSource {
    async fn fetch_page(&self, offset: u64) -> Result<SearchPage, FetchError> {
        let url = self.page_url(offset);
        debug!("GET {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(SearchPage::from_json(&body)?)
    }
}
