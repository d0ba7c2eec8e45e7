pub mod client;
pub mod error;
pub mod normalize;
pub mod query;
pub mod scrape;
pub mod wrapped;

pub use client::{EbayClient, EbayConfig};
pub use error::EbayError;
pub use normalize::{extract_listings, normalize_response, normalize_response_at};
pub use query::SearchQuery;
pub use scrape::{FixedDelay, LogProgress, NoDelay, Pacer, ScrapeObserver, ScrapeOrchestrator};
