// Shared test helpers for mock search API setup and catalog payloads.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use catalog_scraper::fetch::{HttpPageSource, Paginator, RetryPolicy};
use catalog_scraper::initialization::init_client;
use catalog_scraper::{DbConfig, Listing, TABLETS};

/// Path of the mocked search endpoint.
pub const SEARCH_PATH: &str = "/category";

/// Builds one raw catalog item the way the search API sends it.
#[allow(dead_code)] // Used by other test files
pub fn product_json(i: usize) -> Value {
    json!({
        "nameEn": format!("Galaxy Tab A{i}, 4GB RAM, 64GB"),
        "featureEnProcessorCore": "Octa-core",
        "productUrl": format!("https://www.extra.com/en-sa/p/{i}"),
        "sellingPrice": 799.0 + i as f64,
        "wasPrice": 899.0 + i as f64,
        "inStockFlag": i % 2 == 0,
        "brand": ["SAMSNG"]
    })
}

/// Builds a page body holding `count` items and reporting `total`.
#[allow(dead_code)] // Used by other test files
pub fn page_json(count: usize, total: u64) -> Value {
    let products: Vec<Value> = (0..count).map(product_json).collect();
    json!({ "response": { "products": products, "numberOfProducts": total } })
}

/// Serves `body` for the page at `offset`.
#[allow(dead_code)] // Used by other test files
pub async fn mount_page(server: &MockServer, offset: u64, body: Value) {
    Mock::given(method("GET"))
        .and(path(SEARCH_PATH))
        .and(query_param("start", offset.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Listing pointing at the mock server, with the production constants otherwise.
#[allow(dead_code)] // Used by other test files
pub fn mock_base_url(server: &MockServer) -> String {
    format!("{}{}?rows=96&filter=type%3APRODUCT", server.uri(), SEARCH_PATH)
}

/// Paginator over the mock server with retries that do not sleep.
#[allow(dead_code)] // Used by other test files
pub fn mock_paginator(server: &MockServer) -> Paginator<HttpPageSource> {
    mock_paginator_for(server, TABLETS)
}

/// Same as `mock_paginator`, with a custom listing.
#[allow(dead_code)] // Used by other test files
pub fn mock_paginator_for(server: &MockServer, listing: Listing) -> Paginator<HttpPageSource> {
    let client = init_client().expect("Failed to build HTTP client");
    let source = HttpPageSource::with_base_url(client, &mock_base_url(server))
        .expect("Mock server URL should parse");
    Paginator::new(source, listing).with_retry_policy(RetryPolicy::NO_DELAY)
}

/// Offsets requested so far, in order.
#[allow(dead_code)] // Used by other test files
pub async fn requested_offsets(server: &MockServer) -> Vec<u64> {
    server
        .received_requests()
        .await
        .expect("Request recording is enabled")
        .iter()
        .filter_map(|req| {
            req.url
                .query_pairs()
                .find(|(k, _)| k == "start")
                .and_then(|(_, v)| v.parse().ok())
        })
        .collect()
}

/// Database settings aimed at a closed local port.
#[allow(dead_code)] // Used by other test files
pub fn unreachable_db_config() -> DbConfig {
    DbConfig {
        host: "127.0.0.1".to_string(),
        port: 1,
        dbname: "prices".to_string(),
        user: "scraper".to_string(),
        password: "secret".to_string(),
        tablename: "test".to_string(),
    }
}
