//! Extraction properties over the public API.
//!
//! Every raw item, however incomplete, must yield one fully populated record.

use chrono::{TimeZone, Utc};
use serde_json::json;

use catalog_scraper::extract::{correct_brand, extract_product};
use catalog_scraper::fetch::{RawProduct, SearchPage};
use catalog_scraper::TABLETS;

fn raw(value: serde_json::Value) -> RawProduct {
    let body = json!({ "response": { "products": [value], "numberOfProducts": 1 } });
    let (mut products, _) = SearchPage::from_json(&body.to_string())
        .expect("page should decode")
        .into_parts();
    products.remove(0)
}

#[test]
fn test_name_and_specs_split() {
    let now = Utc.with_ymd_and_hms(2024, 3, 10, 8, 15, 0).unwrap();

    let with_comma = extract_product(
        &raw(json!({"nameEn": "Tab X, 8GB RAM", "featureEnProcessorCore": "Octa-core"})),
        &TABLETS,
        now,
    );
    assert_eq!(with_comma.name, "Tab X");
    assert_eq!(with_comma.specs, "8GB RAM, Octa-core");

    let without_comma = extract_product(
        &raw(json!({"nameEn": "Tab X", "featureEnProcessorCore": "Octa-core"})),
        &TABLETS,
        now,
    );
    assert_eq!(without_comma.name, "Tab X");
    assert_eq!(without_comma.specs, "Octa-core");
}

#[test]
fn test_every_subset_of_fields_extracts() {
    let full = json!({
        "nameEn": "Tab X, 8GB RAM",
        "featureEnProcessorCore": "Octa-core",
        "productUrl": "https://www.extra.com/en-sa/p/1",
        "sellingPrice": 1000,
        "wasPrice": 1200,
        "inStockFlag": true,
        "brand": ["APPLE"]
    });
    let keys: Vec<String> = full.as_object().unwrap().keys().cloned().collect();

    for mask in 0..(1u32 << keys.len()) {
        let mut item = full.clone();
        let object = item.as_object_mut().unwrap();
        for (bit, key) in keys.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                object.remove(key);
            }
        }

        let record = extract_product(&raw(item), &TABLETS, Utc::now());

        assert!(!record.name.is_empty());
        assert!(!record.specs.is_empty());
        assert!(!record.link.is_empty());
        assert!(!record.brand.is_empty());
        assert_eq!(record.datetime.len(), "2024-01-01 00:00:00".len());
        assert!(record.datetime.ends_with(":00:00"));
        if record.new_price.is_some() || record.old_price.is_some() {
            assert!(record.old_price.is_some());
        }
    }
}

#[test]
fn test_old_price_defaults_to_new_price() {
    for price in [0.0, 1.5, 999.0, 12_345.67] {
        let record = extract_product(&raw(json!({"sellingPrice": price})), &TABLETS, Utc::now());
        assert_eq!(record.old_price, Some(price));
        assert_eq!(record.old_price, record.new_price);
    }

}

#[test]
fn test_explicit_null_was_price_is_stored_as_null() {
    let missing = extract_product(&raw(json!({"nameEn": "Tab", "sellingPrice": 999})), &TABLETS, Utc::now());
    assert_eq!(missing.old_price, Some(999.0));

    let null_was = extract_product(
        &raw(json!({"nameEn": "Tab", "sellingPrice": 999, "wasPrice": null})),
        &TABLETS,
        Utc::now(),
    );
    assert_eq!(null_was.new_price, Some(999.0));
    assert_eq!(null_was.old_price, None);
}

#[test]
fn test_missing_brand_passes_placeholder_through() {
    let record = extract_product(&raw(json!({})), &TABLETS, Utc::now());
    assert_eq!(record.brand, "No Brand Available");
    assert_eq!(correct_brand(&record.brand), record.brand);
}

#[test]
fn test_brand_correction_case_insensitive_and_idempotent() {
    for (input, expected) in [
        ("tecno", "Tecno"),
        ("Tecno", "Tecno"),
        ("TECNO", "Tecno"),
        ("motorola", "Motorola"),
        ("Lenovo", "Lenovo"),
    ] {
        let once = correct_brand(input);
        assert_eq!(once, expected);
        assert_eq!(correct_brand(&once), once);
    }
}
