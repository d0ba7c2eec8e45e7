//! Accessors for the Finding API's one-element-array JSON convention.
//!
//! Every leaf in a Finding API JSON response is wrapped in a single-element
//! array: `"title": ["Nintendo 64 Console"]`, `"sellingStatus": [{ ... }]`.
//! These helpers unwrap that layer. A missing key, a value that is not an
//! array, and an empty array are all treated as "field absent".

use rust_decimal::Decimal;
use serde_json::Value;

/// Returns the first element of the array stored under `field`.
#[must_use]
pub fn first<'a>(node: &'a Value, field: &str) -> Option<&'a Value> {
    node.get(field)?.as_array()?.first()
}

/// Follows `path`, unwrapping the first element at every step.
///
/// `first_path(item, &["sellingStatus", "currentPrice"])` reads
/// `item.sellingStatus[0].currentPrice[0]`.
#[must_use]
pub fn first_path<'a>(node: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(node, |current, field| first(current, field))
}

/// Returns the first element under `field` as a string slice.
#[must_use]
pub fn first_str<'a>(node: &'a Value, field: &str) -> Option<&'a str> {
    first(node, field)?.as_str()
}

/// Like [`first_str`], falling back to `default` when the field is absent.
#[must_use]
pub fn first_or_default<'a>(node: &'a Value, field: &str, default: &'a str) -> &'a str {
    first_str(node, field).unwrap_or(default)
}

/// Reads the `__value__` of an amount object such as
/// `{"@currencyId": "USD", "__value__": "129.99"}`.
#[must_use]
pub fn amount_value(amount: &Value) -> Option<Decimal> {
    amount.get("__value__").and_then(parse_decimal)
}

/// Parses a JSON string or number as a [`Decimal`].
///
/// Accepts plain (`"129.99"`) and scientific (`"1.2999E2"`) notation.
/// Anything else, including empty strings, yields `None`.
#[must_use]
pub fn parse_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => parse_decimal_str(s),
        Value::Number(n) => parse_decimal_str(&n.to_string()),
        _ => None,
    }
}

fn parse_decimal_str(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    trimmed
        .parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
