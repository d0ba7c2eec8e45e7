//! Sequential multi-console scrape.
//!
//! [`ScrapeOrchestrator`] searches each console in order, one request at a
//! time. Pacing between requests and progress reporting are pluggable via
//! [`Pacer`] and [`ScrapeObserver`] so the loop itself only sequences calls
//! and collects results.

use std::future::Future;
use std::time::Duration;

use retrotrack_core::{default_consoles, ConsoleResult};

use crate::client::EbayClient;

/// Courtesy delay between consecutive searches.
pub const DEFAULT_INTER_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Waits between two consecutive searches.
pub trait Pacer {
    fn pause(&self) -> impl Future<Output = ()> + Send;
}

/// Sleeps for a fixed duration.
#[derive(Debug, Clone, Copy)]
pub struct FixedDelay(pub Duration);

impl Default for FixedDelay {
    fn default() -> Self {
        Self(DEFAULT_INTER_REQUEST_DELAY)
    }
}

impl Pacer for FixedDelay {
    fn pause(&self) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(self.0)
    }
}

/// No delay at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Pacer for NoDelay {
    fn pause(&self) -> impl Future<Output = ()> + Send {
        std::future::ready(())
    }
}

/// Progress hooks invoked around each console search.
pub trait ScrapeObserver {
    /// Called before console `index` (0-based) of `total` is searched.
    fn on_console_start(&self, _index: usize, _total: usize, _console: &str) {}

    fn on_console_finished(&self, _result: &ConsoleResult) {}
}

/// Reports progress through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl ScrapeObserver for LogProgress {
    fn on_console_start(&self, index: usize, total: usize, console: &str) {
        tracing::info!(console, progress = %format!("{}/{total}", index + 1), "scraping console");
    }

    fn on_console_finished(&self, result: &ConsoleResult) {
        match result.error() {
            Some(error) => {
                tracing::warn!(console = result.console(), error, "console scrape failed");
            }
            None => tracing::info!(
                console = result.console(),
                listings = result.listings().len(),
                "console scraped"
            ),
        }
    }
}

/// Searches a fixed list of consoles one after another.
pub struct ScrapeOrchestrator<P = FixedDelay, O = LogProgress> {
    client: EbayClient,
    consoles: Vec<String>,
    pacer: P,
    observer: O,
}

impl ScrapeOrchestrator {
    /// Orchestrator over the default console list with a one-second delay
    /// and `tracing` progress output.
    #[must_use]
    pub fn new(client: EbayClient) -> Self {
        Self {
            client,
            consoles: default_consoles(),
            pacer: FixedDelay::default(),
            observer: LogProgress,
        }
    }
}

impl<P: Pacer, O: ScrapeObserver> ScrapeOrchestrator<P, O> {
    #[must_use]
    pub fn with_consoles(mut self, consoles: Vec<String>) -> Self {
        self.consoles = consoles;
        self
    }

    #[must_use]
    pub fn with_pacer<Q: Pacer>(self, pacer: Q) -> ScrapeOrchestrator<Q, O> {
        ScrapeOrchestrator {
            client: self.client,
            consoles: self.consoles,
            pacer,
            observer: self.observer,
        }
    }

    #[must_use]
    pub fn with_observer<R: ScrapeObserver>(self, observer: R) -> ScrapeOrchestrator<P, R> {
        ScrapeOrchestrator {
            client: self.client,
            consoles: self.consoles,
            pacer: self.pacer,
            observer,
        }
    }

    #[must_use]
    pub fn consoles(&self) -> &[String] {
        &self.consoles
    }

    #[must_use]
    pub fn client(&self) -> &EbayClient {
        &self.client
    }

    /// Searches every console without a condition filter.
    ///
    /// Returns exactly one result per console, in console order. A failed
    /// search is recorded and the loop moves on; the pacer runs between
    /// searches but not after the last one.
    pub async fn scrape_all(&self) -> Vec<ConsoleResult> {
        let total = self.consoles.len();
        let mut results = Vec::with_capacity(total);

        for (index, console) in self.consoles.iter().enumerate() {
            if index > 0 {
                self.pacer.pause().await;
            }

            self.observer.on_console_start(index, total, console);
            let result = self.client.search_console(console, None).await;
            self.observer.on_console_finished(&result);
            results.push(result);
        }

        let failed = results.iter().filter(|r| r.is_failed()).count();
        tracing::info!(total, failed, "scrape finished");

        results
    }
}
