//! Flat listing records and per-console search outcomes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::stats::{compute_market_stats, MarketStats};

/// One completed listing, flattened out of the marketplace response.
///
/// String fields fall back to `""` when the upstream field is absent;
/// numeric and condition fields fall back to `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingRecord {
    pub title: String,
    pub item_id: String,
    pub price: Option<Decimal>,
    pub condition: Option<String>,
    /// `true` only when the listing ended with a sale.
    pub sold: bool,
    /// End time as reported upstream (ISO-8601 for the Finding API).
    pub end_time: String,
    pub url: String,
    pub shipping_cost: Option<Decimal>,
}

/// Outcome of searching one console.
///
/// Failures are data: a transport or parse failure for one console becomes
/// a [`ConsoleResult::Failed`] and never aborts a multi-console run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConsoleResult {
    Listings {
        console: String,
        count: usize,
        listings: Vec<ListingRecord>,
        timestamp: DateTime<Utc>,
    },
    Failed {
        console: String,
        error: String,
    },
}

impl ConsoleResult {
    #[must_use]
    pub fn from_listings(
        console: &str,
        listings: Vec<ListingRecord>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        ConsoleResult::Listings {
            console: console.to_owned(),
            count: listings.len(),
            listings,
            timestamp,
        }
    }

    #[must_use]
    pub fn failed(console: &str, error: impl Into<String>) -> Self {
        ConsoleResult::Failed {
            console: console.to_owned(),
            error: error.into(),
        }
    }

    #[must_use]
    pub fn console(&self) -> &str {
        match self {
            ConsoleResult::Listings { console, .. } | ConsoleResult::Failed { console, .. } => {
                console.as_str()
            }
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, ConsoleResult::Failed { .. })
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            ConsoleResult::Failed { error, .. } => Some(error.as_str()),
            ConsoleResult::Listings { .. } => None,
        }
    }

    /// Listings of a successful search; empty for a failed one.
    #[must_use]
    pub fn listings(&self) -> &[ListingRecord] {
        match self {
            ConsoleResult::Listings { listings, .. } => listings.as_slice(),
            ConsoleResult::Failed { .. } => &[],
        }
    }

    #[must_use]
    pub fn stats(&self) -> MarketStats {
        compute_market_stats(self.listings())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(item_id: &str) -> ListingRecord {
        ListingRecord {
            title: "Nintendo 64 Console Bundle".to_string(),
            item_id: item_id.to_string(),
            price: Some(Decimal::new(8999, 2)),
            condition: Some("Used".to_string()),
            sold: true,
            end_time: "2024-03-01T18:22:05.000Z".to_string(),
            url: format!("https://www.ebay.com/itm/{item_id}"),
            shipping_cost: None,
        }
    }

    #[test]
    fn from_listings_sets_count() {
        let result =
            ConsoleResult::from_listings("Nintendo 64", vec![listing("1"), listing("2")], Utc::now());
        match result {
            ConsoleResult::Listings { count, .. } => assert_eq!(count, 2),
            ConsoleResult::Failed { .. } => panic!("expected listings"),
        }
    }

    #[test]
    fn failed_result_has_no_listings() {
        let result = ConsoleResult::failed("GameCube", "HTTP error: connection refused");
        assert!(result.is_failed());
        assert_eq!(result.console(), "GameCube");
        assert_eq!(result.error(), Some("HTTP error: connection refused"));
        assert!(result.listings().is_empty());
        assert_eq!(result.stats(), MarketStats::default());
    }

    #[test]
    fn serializes_failed_without_listing_fields() {
        let result = ConsoleResult::failed("GameCube", "boom");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "console": "GameCube", "error": "boom" })
        );
    }

    #[test]
    fn untagged_round_trip_picks_the_right_variant() {
        let original = ConsoleResult::from_listings("Sega Genesis", vec![listing("7")], Utc::now());
        let json = serde_json::to_string(&original).unwrap();
        let back: ConsoleResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);

        let failed: ConsoleResult =
            serde_json::from_str(r#"{"console":"Sega Genesis","error":"parse error"}"#).unwrap();
        assert!(failed.is_failed());
    }
}
