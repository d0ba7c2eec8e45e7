//! Normalization of raw `findCompletedItems` payloads into
//! [`retrotrack_core::ListingRecord`]s.
//!
//! The Finding API wraps every value in a one-element array; all field access
//! goes through [`crate::wrapped`]. Item-level fields degrade to defaults when
//! absent. Only a missing response envelope or search result is an error.

use chrono::{DateTime, Utc};
use retrotrack_core::{ConsoleResult, ListingRecord};
use serde_json::Value;

use crate::error::EbayError;
use crate::wrapped::{amount_value, first, first_or_default, first_path, first_str};

const RESPONSE_KEY: &str = "findCompletedItemsResponse";

/// `sellingState` of a listing that ended with at least one sale.
const SOLD_STATE: &str = "EndedWithSales";

/// Normalizes `payload` into a [`ConsoleResult`] stamped with the current time.
///
/// Never fails: structural problems become [`ConsoleResult::Failed`].
#[must_use]
pub fn normalize_response(payload: &Value, console: &str) -> ConsoleResult {
    normalize_response_at(payload, console, Utc::now())
}

/// Same as [`normalize_response`] with an explicit capture time.
#[must_use]
pub fn normalize_response_at(
    payload: &Value,
    console: &str,
    captured_at: DateTime<Utc>,
) -> ConsoleResult {
    match extract_listings(payload) {
        Ok(listings) => ConsoleResult::from_listings(console, listings, captured_at),
        Err(e) => ConsoleResult::failed(console, e.to_string()),
    }
}

/// Extracts listing records from a `findCompletedItems` payload.
///
/// A search result reporting `@count` of `"0"` yields an empty list.
///
/// # Errors
///
/// - [`EbayError::ApiError`] if the envelope's `ack` is `Failure`.
/// - [`EbayError::Parse`] if the envelope or search result is missing.
pub fn extract_listings(payload: &Value) -> Result<Vec<ListingRecord>, EbayError> {
    let envelope = first(payload, RESPONSE_KEY)
        .ok_or_else(|| EbayError::Parse(format!("missing {RESPONSE_KEY}[0]")))?;

    if first_str(envelope, "ack") == Some("Failure") {
        return Err(EbayError::ApiError(upstream_error_message(envelope)));
    }

    let search_result = first(envelope, "searchResult")
        .ok_or_else(|| EbayError::Parse(format!("missing {RESPONSE_KEY}[0].searchResult[0]")))?;

    if search_result.get("@count").and_then(Value::as_str) == Some("0") {
        return Ok(Vec::new());
    }

    let items = search_result
        .get("item")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    Ok(items.iter().map(normalize_item).collect())
}

/// Flattens one `item` entry. Missing fields never fail the record.
fn normalize_item(item: &Value) -> ListingRecord {
    let sold = first_path(item, &["sellingStatus", "sellingState"])
        .and_then(Value::as_str)
        .unwrap_or("")
        == SOLD_STATE;

    ListingRecord {
        title: first_or_default(item, "title", "").to_owned(),
        item_id: first_or_default(item, "itemId", "").to_owned(),
        price: first_path(item, &["sellingStatus", "currentPrice"]).and_then(amount_value),
        condition: first_path(item, &["condition", "conditionDisplayName"])
            .and_then(Value::as_str)
            .map(str::to_owned),
        sold,
        end_time: first(item, "listingInfo")
            .map_or("", |info| first_or_default(info, "endTime", ""))
            .to_owned(),
        url: first_or_default(item, "viewItemURL", "").to_owned(),
        shipping_cost: first_path(item, &["shippingInfo", "shippingServiceCost"])
            .and_then(amount_value),
    }
}

/// Pulls `errorMessage[0].error[0].message[0]` out of a failed envelope.
fn upstream_error_message(envelope: &Value) -> String {
    first_path(envelope, &["errorMessage", "error", "message"])
        .and_then(Value::as_str)
        .unwrap_or("request failed without an error message")
        .to_owned()
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
