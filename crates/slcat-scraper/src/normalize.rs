//! Normalization from raw Searchspring result items to
//! [`slcat_core::CatalogRecord`].
//!
//! Pure and infallible: unexpected shapes degrade to empty/absent fields
//! rather than failing the walk.

use serde_json::{Map, Value};
use slcat_core::CatalogRecord;

use crate::client::resolve_item_url;

/// Normalizes one raw result item, resolving its URL against `domain`.
///
/// The item itself is moved into [`CatalogRecord::raw`] unchanged.
#[must_use]
pub fn normalize_item(item: Map<String, Value>, domain: &str) -> CatalogRecord {
    let name = first_truthy(&item, &["name", "title"])
        .map(value_to_string)
        .unwrap_or_default();

    let raw_url = first_truthy(&item, &["url"])
        .map(value_to_string)
        .unwrap_or_default();
    let url = resolve_item_url(domain, &raw_url);

    let price = coerce_price(item.get("price"));

    // When neither key is truthy, the `salePrice` value is what gets coerced.
    let sale_price = coerce_price(
        first_truthy(&item, &["sale_price", "salePrice"]).or_else(|| item.get("salePrice")),
    );

    let image = first_truthy(&item, &["thumbnail_image", "thumbnailImage"]).map(value_to_string);

    CatalogRecord {
        name,
        url,
        price,
        sale_price,
        image,
        raw: item,
    }
}

/// Lenient numeric coercion for price fields.
///
/// Numbers pass through; strings are trimmed and parsed. Anything else,
/// including unparseable or non-finite values, yields `None`.
#[must_use]
pub fn coerce_price(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        // Booleans are not prices, even though `true` would cast to 1.
        _ => None,
    };
    parsed.filter(|v| v.is_finite())
}

/// Returns the first value under `keys` that is present and truthy.
fn first_truthy<'a>(item: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| item.get(*key))
        .find(|v| is_truthy(v))
}

/// Null, `false`, `0`, `""`, `[]` and `{}` are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Strings are taken verbatim (no JSON quoting); other values use their
/// JSON rendering.
fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
