//! Database record model.

/// One normalized catalog item, ready for insertion.
///
/// # Database Schema
///
/// Fields map 1:1, in declaration order, onto the columns
/// `(name, specs, new_price, old_price, link, brand, category, datetime, stock, store)`
/// of the configured table. Every field is always populated: missing source
/// data is replaced by sentinel strings during extraction, and only the two
/// prices may be NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    /// Title up to its first comma
    pub name: String,
    /// Rest of the title followed by the processor attribute
    pub specs: String,
    /// Current selling price
    pub new_price: Option<f64>,
    /// Previous ("was") price; the selling price when the source omits it
    pub old_price: Option<f64>,
    /// Product page URL, or a sentinel
    pub link: String,
    /// Corrected brand name
    pub brand: String,
    /// Listing category, e.g. `"tablets"`
    pub category: String,
    /// Capture time in store-local time (UTC+3), truncated to the hour.
    pub datetime: String,
    /// In-stock flag, `false` when unknown
    pub stock: bool,
    /// Source store, e.g. `"extra"`
    pub store: String,
}

/// Target column list, in the order values are bound.
pub const PRODUCT_COLUMNS: [&str; 10] = [
    "name",
    "specs",
    "new_price",
    "old_price",
    "link",
    "brand",
    "category",
    "datetime",
    "stock",
    "store",
];
