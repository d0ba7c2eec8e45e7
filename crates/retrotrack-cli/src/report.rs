//! Text and JSON rendering of scrape results.

use rust_decimal::Decimal;
use serde::Serialize;

use retrotrack_core::{ConsoleResult, ListingRecord, MarketStats};

/// One console's result paired with its stats, as emitted by `--json`.
#[derive(Debug, Serialize)]
pub(crate) struct ConsoleReport<'a> {
    pub result: &'a ConsoleResult,
    pub stats: MarketStats,
}

pub(crate) fn build_reports(results: &[ConsoleResult]) -> Vec<ConsoleReport<'_>> {
    results
        .iter()
        .map(|result| ConsoleReport {
            result,
            stats: result.stats(),
        })
        .collect()
}

pub(crate) fn render_json(results: &[ConsoleResult]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&build_reports(results))
}

/// One-line summary, e.g.
/// `Nintendo 64: 100 listings, 61 sold, avg $82.10, median $79.99, min $15.00, max $249.99`.
pub(crate) fn render_summary(result: &ConsoleResult) -> String {
    if let Some(error) = result.error() {
        return format!("{}: FAILED ({error})", result.console());
    }

    let stats = result.stats();
    format!(
        "{}: {} listings, {} sold, avg {}, median {}, min {}, max {}",
        result.console(),
        stats.total_listings,
        stats.sold_count,
        money(stats.avg_price),
        money(stats.median_price),
        money(stats.min_price),
        money(stats.max_price),
    )
}

pub(crate) fn render_listing(listing: &ListingRecord) -> String {
    let price = listing.price.map_or_else(|| "n/a".to_string(), money);
    let condition = listing.condition.as_deref().unwrap_or("unknown");
    let status = if listing.sold { "sold" } else { "unsold" };
    format!(
        "[{status}] {price} ({condition}) {} {}",
        listing.title, listing.url
    )
}

fn money(amount: Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}
