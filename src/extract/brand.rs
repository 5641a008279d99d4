//! Brand name correction.
//!
//! The catalog sends most brands in upper case (and at least one misspelled).
//! Known brands are mapped to their display spelling; anything else is kept
//! as sent.

/// Uppercase catalog spelling → display spelling.
const BRAND_CORRECTIONS: &[(&str, &str)] = &[
    ("TECNO", "Tecno"),
    ("APPLE", "Apple"),
    ("NOKIA", "Nokia"),
    ("XIAOMI", "Xiaomi"),
    ("VIVO", "Vivo"),
    ("MOTOROLA", "Motorola"),
    ("HUAWEI", "Huawei"),
    ("NOTHING", "Nothing"),
    ("REALME", "Realme"),
    ("HONOR", "Honor"),
    ("SAMSNG", "Samsung"),
    ("INFINIX", "Infinix"),
];

/// Returns the display spelling of `brand`.
///
/// Lookup is case-insensitive. Unknown brands are returned unchanged, and
/// applying the correction to its own output is a no-op.
pub fn correct_brand(brand: &str) -> String {
    let key = brand.to_uppercase();
    BRAND_CORRECTIONS
        .iter()
        .find(|(raw, _)| *raw == key)
        .map(|(_, display)| (*display).to_string())
        .unwrap_or_else(|| brand.to_string())
}
