//! Search API page schema.
//!
//! A page body looks like
//! `{ "response": { "products": [...], "numberOfProducts": <int> } }`.
//! Every field is optional. Item fields are decoded leniently: a value of
//! the wrong JSON type is treated as absent (prices also accept numeric
//! strings), so one odd item cannot fail a whole page and trap pagination in
//! its retry loop.
//!
//! `wasPrice` is the one field where a missing key and an explicit `null`
//! mean different things, so it decodes to `Option<Option<f64>>`.

use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decoded body of one search page.
#[derive(Debug, Default, Deserialize)]
pub struct SearchPage {
    /// Result payload; absent on some error bodies
    #[serde(default)]
    pub response: Option<SearchResponse>,
}

/// The `response` object of a search page.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    /// Items on this page
    #[serde(default, deserialize_with = "lenient_products")]
    pub products: Vec<RawProduct>,
    /// Total size of the result set as reported by the server.
    #[serde(rename = "numberOfProducts", default, deserialize_with = "lenient")]
    pub number_of_products: Option<u64>,
}

impl SearchPage {
    /// Parses a page body.
    pub fn from_json(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// Products on this page (empty when the `response` object is missing).
    pub fn products(&self) -> &[RawProduct] {
        self.response
            .as_ref()
            .map(|r| r.products.as_slice())
            .unwrap_or(&[])
    }

    /// Server-reported total, 0 when missing.
    pub fn total(&self) -> u64 {
        self.response
            .as_ref()
            .and_then(|r| r.number_of_products)
            .unwrap_or(0)
    }

    /// Consumes the page, returning its products and the reported total.
    pub fn into_parts(self) -> (Vec<RawProduct>, u64) {
        let total = self.total();
        let products = self.response.map(|r| r.products).unwrap_or_default();
        (products, total)
    }
}

/// One catalog item as sent by the search API.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct RawProduct {
    /// Full English title, e.g. `"Galaxy Tab S9, 8GB RAM, 128GB, Wi-Fi"`.
    #[serde(rename = "nameEn", default, deserialize_with = "lenient")]
    pub name_en: Option<String>,
    /// Processor attribute, e.g. `"Octa-core"`.
    #[serde(rename = "featureEnProcessorCore", default, deserialize_with = "lenient")]
    pub processor_core: Option<String>,
    /// Absolute product page URL.
    #[serde(rename = "productUrl", default, deserialize_with = "lenient")]
    pub product_url: Option<String>,
    /// Current price.
    #[serde(rename = "sellingPrice", default, deserialize_with = "lenient_price")]
    pub selling_price: Option<f64>,
    /// Previous price. `None` when the key is missing, `Some(None)` when it is
    /// present but null or unusable.
    #[serde(rename = "wasPrice", default, deserialize_with = "present_price")]
    pub was_price: Option<Option<f64>>,
    /// Whether the item can be ordered.
    #[serde(rename = "inStockFlag", default, deserialize_with = "lenient")]
    pub in_stock_flag: Option<bool>,
    /// Brand names; only the first is used.
    #[serde(default, deserialize_with = "lenient_brand")]
    pub brand: Option<Vec<String>>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().filter(|p| p.is_finite()),
        _ => None,
    })
}

// Only called when the key is present; a missing key falls to `default`.
fn present_price<'de, D>(deserializer: D) -> Result<Option<Option<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    lenient_price(deserializer).map(Some)
}

// The API sends a list; a bare string is accepted as a one-element list.
fn lenient_brand<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(vec![s]),
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    })
}

// Items that are not JSON objects are dropped with a warning.
fn lenient_products<'de, D>(deserializer: D) -> Result<Vec<RawProduct>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Array(items)) = value else {
        return Ok(Vec::new());
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(_) => serde_json::from_value(item).ok(),
            other => {
                warn!("Skipping catalog item that is not an object: {}", other);
                None
            }
        })
        .collect())
}
