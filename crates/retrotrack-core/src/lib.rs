pub mod app_config;
pub mod config;
pub mod consoles;
pub mod listings;
pub mod stats;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use consoles::{default_consoles, load_consoles, ConsolesFile, DEFAULT_CONSOLES};
pub use listings::{ConsoleResult, ListingRecord};
pub use stats::{compute_market_stats, MarketStats};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read consoles file {path}: {source}")]
    ConsolesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse consoles file: {0}")]
    ConsolesFileParse(#[source] serde_yaml::Error),

    #[error("consoles validation failed: {0}")]
    Validation(String),
}
