//! Request header values for catalog page requests.
//!
//! The search API is queried the way the store's own storefront queries it,
//! so these mirror a desktop Chrome session on the English Saudi storefront.

/// User-Agent sent with every page request.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Accept header; the API answers in JSON
pub const ACCEPT: &str = "application/json";
/// Accept-Language header
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9,ar-EG;q=0.8,ar;q=0.7";
/// Cache-Control header
pub const CACHE_CONTROL: &str = "no-cache";
/// Content-Type header
pub const CONTENT_TYPE: &str = "application/json";
/// Pragma header
pub const PRAGMA: &str = "no-cache";

/// Referer of the storefront that issues these searches.
pub const REFERER: &str = "https://www.extra.com/en-sa/";
