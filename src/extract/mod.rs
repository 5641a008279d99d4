//! Per-item extraction.
//!
//! Maps one `RawProduct` onto a `ProductRecord`. Extraction never fails:
//! every missing source field is replaced by a sentinel, so each item of a
//! page yields exactly one fully populated record.

mod brand;

use chrono::{DateTime, TimeDelta, Utc};
use log::debug;

use crate::config::{
    Listing, CAPTURE_TIMESTAMP_FORMAT, CAPTURE_UTC_OFFSET_HOURS, NO_BRAND, NO_NAME,
    NO_PROCESSOR_INFO, NO_URL,
};
use crate::fetch::RawProduct;
use crate::storage::ProductRecord;

pub use brand::correct_brand;

/// Source of the capture instant.
pub trait Clock: Send + Sync {
    /// Current instant in UTC.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Formats `now` as store-local (UTC+3) time truncated to the hour.
pub fn capture_timestamp(now: DateTime<Utc>) -> String {
    let local = now.naive_utc() + TimeDelta::hours(CAPTURE_UTC_OFFSET_HOURS);
    local.format(CAPTURE_TIMESTAMP_FORMAT).to_string()
}

/// Splits a title at its first comma into `(name, additional_name)`.
///
/// Both parts are trimmed; the additional part is empty when the title has
/// no comma.
pub fn split_title(title: &str) -> (&str, &str) {
    let (name, rest) = title.split_once(',').unwrap_or((title, ""));
    (name.trim(), rest.trim())
}

/// Joins the title remainder and the processor attribute.
pub fn build_specs(additional_name: &str, processor_core: &str) -> String {
    if additional_name.is_empty() {
        processor_core.to_string()
    } else {
        format!("{additional_name}, {processor_core}")
    }
}

/// Extracts one record, captured at `now`.
pub fn extract_product(raw: &RawProduct, listing: &Listing, now: DateTime<Utc>) -> ProductRecord {
    let title = raw.name_en.as_deref().unwrap_or(NO_NAME);
    let (name, additional_name) = split_title(title);
    let processor_core = raw.processor_core.as_deref().unwrap_or(NO_PROCESSOR_INFO);

    let new_price = raw.selling_price;
    // An explicit null was price is kept as NULL; only a missing key falls back.
    let old_price = raw.was_price.unwrap_or(new_price);
    let stock = raw.in_stock_flag.unwrap_or(false);

    let raw_brand = raw
        .brand
        .as_ref()
        .and_then(|brands| brands.first())
        .map(String::as_str)
        .unwrap_or(NO_BRAND);

    debug!("Product {title} - inStockFlag: {stock}");

    ProductRecord {
        name: name.to_string(),
        specs: build_specs(additional_name, processor_core),
        new_price,
        old_price,
        link: raw
            .product_url
            .clone()
            .unwrap_or_else(|| NO_URL.to_string()),
        brand: correct_brand(raw_brand),
        category: listing.category.to_string(),
        datetime: capture_timestamp(now),
        stock,
        store: listing.store.to_string(),
    }
}

/// Extracts every item of a page, reading the clock once per item.
pub fn extract_page(
    products: &[RawProduct],
    listing: &Listing,
    clock: &dyn Clock,
) -> Vec<ProductRecord> {
    products
        .iter()
        .map(|raw| extract_product(raw, listing, clock.now()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TABLETS;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    #[test]
    fn test_capture_timestamp_truncates_to_hour() {
        assert_eq!(
            capture_timestamp(at(2024, 5, 1, 10, 47, 12)),
            "2024-05-01 13:00:00"
        );
    }

    #[test]
    fn test_capture_timestamp_rolls_over_midnight() {
        assert_eq!(
            capture_timestamp(at(2024, 12, 31, 22, 5, 0)),
            "2025-01-01 01:00:00"
        );
    }

    #[test]
    fn test_split_title() {
        assert_eq!(split_title("Tab X, 8GB RAM"), ("Tab X", "8GB RAM"));
        assert_eq!(split_title("Tab X, 8GB, 128GB"), ("Tab X", "8GB, 128GB"));
        assert_eq!(split_title("Tab X"), ("Tab X", ""));
        assert_eq!(split_title("Tab X,"), ("Tab X", ""));
    }

    #[test]
    fn test_build_specs() {
        assert_eq!(build_specs("8GB RAM", "Octa-core"), "8GB RAM, Octa-core");
        assert_eq!(build_specs("", "Octa-core"), "Octa-core");
    }

    #[test]
    fn test_extract_full_item() {
        let raw = RawProduct {
            name_en: Some("Galaxy Tab S9, 8GB RAM, 256GB".to_string()),
            processor_core: Some("Octa-core".to_string()),
            product_url: Some("https://www.extra.com/en-sa/p/42".to_string()),
            selling_price: Some(2999.0),
            was_price: Some(Some(3499.0)),
            in_stock_flag: Some(true),
            brand: Some(vec!["SAMSNG".to_string()]),
        };
        let record = extract_product(&raw, &TABLETS, at(2024, 5, 1, 9, 30, 0));

        assert_eq!(record.name, "Galaxy Tab S9");
        assert_eq!(record.specs, "8GB RAM, 256GB, Octa-core");
        assert_eq!(record.new_price, Some(2999.0));
        assert_eq!(record.old_price, Some(3499.0));
        assert_eq!(record.link, "https://www.extra.com/en-sa/p/42");
        assert_eq!(record.brand, "Samsung");
        assert_eq!(record.category, "tablets");
        assert_eq!(record.datetime, "2024-05-01 12:00:00");
        assert!(record.stock);
        assert_eq!(record.store, "extra");
    }

    #[test]
    fn test_extract_empty_item_uses_sentinels() {
        let record = extract_product(&RawProduct::default(), &TABLETS, at(2024, 5, 1, 0, 0, 0));

        assert_eq!(record.name, "No Name Available");
        assert_eq!(record.specs, "No Processor Info Available");
        assert_eq!(record.new_price, None);
        assert_eq!(record.old_price, None);
        assert_eq!(record.link, "No URL Available");
        assert_eq!(record.brand, "No Brand Available");
        assert!(!record.stock);
    }

    #[test]
    fn test_old_price_falls_back_to_new_price() {
        let raw = RawProduct {
            selling_price: Some(1299.0),
            ..Default::default()
        };
        let record = extract_product(&raw, &TABLETS, Utc::now());
        assert_eq!(record.old_price, Some(1299.0));
        assert_eq!(record.old_price, record.new_price);
    }

    #[test]
    fn test_null_was_price_is_kept_null() {
        let raw = RawProduct {
            selling_price: Some(1299.0),
            was_price: Some(None),
            ..Default::default()
        };
        let record = extract_product(&raw, &TABLETS, Utc::now());
        assert_eq!(record.new_price, Some(1299.0));
        assert_eq!(record.old_price, None);
    }

    #[test]
    fn test_empty_brand_list_uses_sentinel() {
        let raw = RawProduct {
            brand: Some(Vec::new()),
            ..Default::default()
        };
        let record = extract_product(&raw, &TABLETS, Utc::now());
        assert_eq!(record.brand, "No Brand Available");
    }

    #[test]
    fn test_extract_page_reads_clock() {
        let clock = FixedClock(at(2024, 5, 1, 20, 59, 59));
        let products = vec![RawProduct::default(), RawProduct::default()];
        let records = extract_page(&products, &TABLETS, &clock);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.datetime == "2024-05-01 23:00:00"));
    }
}
