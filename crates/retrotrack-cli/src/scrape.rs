//! Scrape command handlers for the CLI.
//!
//! Per-console failures are part of the output, not errors: only
//! configuration problems (missing app id, unreadable consoles file) make a
//! command fail.

use std::path::Path;
use std::time::Duration;

use retrotrack_core::{default_consoles, load_consoles, AppConfig};
use retrotrack_ebay::{EbayClient, EbayConfig, FixedDelay, ScrapeOrchestrator};

use crate::report;

/// Picks the console list: explicit `--consoles` file, then
/// `RETROTRACK_CONSOLES_PATH`, then the built-in list.
pub(crate) fn resolve_consoles(
    config: &AppConfig,
    consoles_path: Option<&Path>,
) -> anyhow::Result<Vec<String>> {
    match consoles_path.or(config.consoles_path.as_deref()) {
        Some(path) => Ok(load_consoles(path)?.consoles),
        None => Ok(default_consoles()),
    }
}

pub(crate) fn build_ebay_client(config: &AppConfig) -> anyhow::Result<EbayClient> {
    EbayClient::new(EbayConfig::from_app_config(config))
        .map_err(|e| anyhow::anyhow!("failed to build eBay client: {e}"))
}

/// Searches every console in order and prints one report per console.
///
/// # Errors
///
/// Returns an error if the console list cannot be loaded or the eBay client
/// cannot be built. Individual console failures are printed, not propagated.
pub(crate) async fn run_scrape(
    config: &AppConfig,
    consoles_path: Option<&Path>,
    json: bool,
) -> anyhow::Result<()> {
    let consoles = resolve_consoles(config, consoles_path)?;
    let client = build_ebay_client(config)?;
    tracing::info!(
        consoles = consoles.len(),
        delay_ms = config.inter_request_delay_ms,
        "starting scrape"
    );

    let orchestrator = ScrapeOrchestrator::new(client)
        .with_consoles(consoles)
        .with_pacer(FixedDelay(Duration::from_millis(
            config.inter_request_delay_ms,
        )));

    let results = orchestrator.scrape_all().await;

    if json {
        println!("{}", report::render_json(&results)?);
    } else {
        for result in &results {
            println!("{}", report::render_summary(result));
        }
    }

    Ok(())
}

/// Searches a single console, optionally filtered by condition.
///
/// # Errors
///
/// Returns an error if the eBay client cannot be built.
pub(crate) async fn run_search(
    config: &AppConfig,
    console: &str,
    condition: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let client = build_ebay_client(config)?;
    let result = client.search_console(console, condition).await;

    if json {
        println!("{}", report::render_json(std::slice::from_ref(&result))?);
    } else {
        println!("{}", report::render_summary(&result));
        for listing in result.listings() {
            println!("  {}", report::render_listing(listing));
        }
    }

    Ok(())
}

/// Prints the consoles a scrape would search, one per line.
///
/// # Errors
///
/// Returns an error if a consoles file is configured but cannot be loaded.
pub(crate) fn run_consoles(config: &AppConfig, consoles_path: Option<&Path>) -> anyhow::Result<()> {
    for console in resolve_consoles(config, consoles_path)? {
        println!("{console}");
    }
    Ok(())
}
