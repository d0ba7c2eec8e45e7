//! Aggregate market statistics over a set of listings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::listings::ListingRecord;

/// Summary of one console's listings.
///
/// Price figures are zero when no listing carries a price; check
/// `total_listings` to tell "no data" apart from "free".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketStats {
    pub total_listings: usize,
    pub sold_count: usize,
    pub avg_price: Decimal,
    pub min_price: Decimal,
    pub max_price: Decimal,
    pub median_price: Decimal,
}

/// Computes [`MarketStats`] for `listings`.
///
/// Listings without a price count toward `total_listings` and `sold_count`
/// but are left out of every price figure. The median is the element at
/// index `n / 2` of the sorted prices, so for an even count it is the upper
/// of the two middle values rather than their mean.
///
/// A price of zero is a real price and takes part in every figure; only
/// `None` is left out.
#[must_use]
pub fn compute_market_stats(listings: &[ListingRecord]) -> MarketStats {
    if listings.is_empty() {
        return MarketStats::default();
    }

    let mut stats = MarketStats {
        total_listings: listings.len(),
        sold_count: listings.iter().filter(|l| l.sold).count(),
        ..MarketStats::default()
    };

    let mut prices: Vec<Decimal> = listings.iter().filter_map(|l| l.price).collect();
    if prices.is_empty() {
        return stats;
    }
    prices.sort_unstable();

    stats.avg_price = mean(&prices);
    stats.min_price = prices[0];
    stats.max_price = prices[prices.len() - 1];
    stats.median_price = prices[prices.len() / 2];
    stats
}

/// Arithmetic mean that never overflows.
///
/// Sums first when the total fits in a [`Decimal`]; otherwise divides each
/// price by the count before adding.
fn mean(prices: &[Decimal]) -> Decimal {
    let count = Decimal::from(prices.len());
    match prices
        .iter()
        .try_fold(Decimal::ZERO, |acc, p| acc.checked_add(*p))
    {
        Some(sum) => sum / count,
        None => prices
            .iter()
            .fold(Decimal::ZERO, |acc, p| acc.saturating_add(*p / count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal {
        s.parse().expect("test decimal should parse")
    }

    fn listing(price: Option<&str>, sold: bool) -> ListingRecord {
        ListingRecord {
            title: "Super Nintendo SNES Console".to_string(),
            item_id: "1234".to_string(),
            price: price.map(d),
            condition: None,
            sold,
            end_time: String::new(),
            url: String::new(),
            shipping_cost: None,
        }
    }

    #[test]
    fn empty_input_yields_zeroed_stats() {
        assert_eq!(compute_market_stats(&[]), MarketStats::default());
    }

    #[test]
    fn odd_count_median_is_middle_element() {
        let listings = vec![
            listing(Some("30"), false),
            listing(Some("10"), false),
            listing(Some("20"), false),
        ];
        let stats = compute_market_stats(&listings);
        assert_eq!(stats.median_price, d("20"));
        assert_eq!(stats.avg_price, d("20"));
        assert_eq!(stats.min_price, d("10"));
        assert_eq!(stats.max_price, d("30"));
    }

    // Even counts take the upper-middle element (index n/2), not the mean of
    // the two middle values. Downstream consumers depend on this.
    #[test]
    fn even_count_median_takes_upper_middle_element() {
        let listings = vec![
            listing(Some("40"), false),
            listing(Some("10"), false),
            listing(Some("30"), false),
            listing(Some("20"), false),
        ];
        let stats = compute_market_stats(&listings);
        assert_eq!(stats.median_price, d("30"));
        assert_ne!(stats.median_price, d("25"));
        assert_eq!(stats.avg_price, d("25"));
    }

    #[test]
    fn unpriced_listings_count_toward_totals_only() {
        let listings = vec![
            listing(Some("50.00"), true),
            listing(None, true),
            listing(Some("100.00"), false),
            listing(None, false),
        ];
        let stats = compute_market_stats(&listings);
        assert_eq!(stats.total_listings, 4);
        assert_eq!(stats.sold_count, 2);
        assert_eq!(stats.avg_price, d("75"));
        assert_eq!(stats.min_price, d("50"));
        assert_eq!(stats.max_price, d("100"));
    }

    #[test]
    fn no_priced_listings_keeps_counts_and_zero_prices() {
        let listings = vec![listing(None, true), listing(None, false)];
        let stats = compute_market_stats(&listings);
        assert_eq!(stats.total_listings, 2);
        assert_eq!(stats.sold_count, 1);
        assert_eq!(stats.avg_price, Decimal::ZERO);
        assert_eq!(stats.min_price, Decimal::ZERO);
        assert_eq!(stats.max_price, Decimal::ZERO);
        assert_eq!(stats.median_price, Decimal::ZERO);
    }

    #[test]
    fn zero_price_is_a_real_price() {
        let listings = vec![listing(Some("0"), false), listing(Some("20"), false)];
        let stats = compute_market_stats(&listings);
        assert_eq!(stats.min_price, Decimal::ZERO);
        assert_eq!(stats.avg_price, d("10"));
    }

    #[test]
    fn prices_summing_past_decimal_max_do_not_overflow() {
        let listings = vec![
            listing(Some("79228162514264337593543950335"), true),
            listing(Some("79228162514264337593543950335"), false),
        ];
        let stats = compute_market_stats(&listings);
        assert_eq!(stats.total_listings, 2);
        assert!(Decimal::MAX - stats.avg_price <= Decimal::ONE);
        assert_eq!(stats.min_price, Decimal::MAX);
        assert_eq!(stats.max_price, Decimal::MAX);
        assert_eq!(stats.median_price, Decimal::MAX);
    }

    #[test]
    fn mean_of_large_mixed_prices_stays_in_range() {
        let listings = vec![
            listing(Some("79228162514264337593543950335"), false),
            listing(Some("1"), false),
        ];
        let stats = compute_market_stats(&listings);
        assert!(stats.avg_price > d("39614081257132168796771975166"));
        assert!(stats.avg_price <= Decimal::MAX);
    }
}
