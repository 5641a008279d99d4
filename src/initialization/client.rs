//! HTTP client initialization.
//!
//! This module builds the single `reqwest::Client` reused for every page of a
//! run, so the connection to the search API stays alive across pages.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::ClientBuilder;

use crate::config::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONTENT_TYPE, PRAGMA, REFERER,
    REQUEST_TIMEOUT_SECS, TCP_CONNECT_TIMEOUT_SECS, USER_AGENT,
};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for catalog page requests.
///
/// Creates a `reqwest::Client` configured with:
/// - The storefront's User-Agent, Accept, Accept-Language, Cache-Control,
///   Content-Type, Pragma and Referer headers on every request
/// - A per-request timeout and a TCP connect timeout
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .default_headers(default_headers())
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static(ACCEPT));
    headers.insert(
        header::ACCEPT_LANGUAGE,
        HeaderValue::from_static(ACCEPT_LANGUAGE),
    );
    headers.insert(header::CACHE_CONTROL, HeaderValue::from_static(CACHE_CONTROL));
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(CONTENT_TYPE));
    headers.insert(header::PRAGMA, HeaderValue::from_static(PRAGMA));
    headers.insert(header::REFERER, HeaderValue::from_static(REFERER));
    headers
}
