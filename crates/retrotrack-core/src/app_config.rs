use std::path::PathBuf;

/// Default eBay Finding API endpoint.
pub const DEFAULT_EBAY_BASE_URL: &str = "https://svcs.ebay.com/services/search/FindingService/v1";

/// eBay category id for "Video Game Consoles".
pub const DEFAULT_EBAY_CATEGORY_ID: &str = "139971";

pub const DEFAULT_USER_AGENT: &str = "retrotrack/0.1 (market-research)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// eBay application id (`SECURITY-APPNAME`). Optional at load time; the
    /// eBay client refuses to build without it.
    pub ebay_app_id: Option<String>,
    pub ebay_base_url: String,
    pub ebay_category_id: String,
    /// Total request timeout. `None` leaves reqwest's default in place,
    /// which never times out a request.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub inter_request_delay_ms: u64,
    pub consoles_path: Option<PathBuf>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("log_level", &self.log_level)
            .field(
                "ebay_app_id",
                &self.ebay_app_id.as_ref().map(|_| "[redacted]"),
            )
            .field("ebay_base_url", &self.ebay_base_url)
            .field("ebay_category_id", &self.ebay_category_id)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("inter_request_delay_ms", &self.inter_request_delay_ms)
            .field("consoles_path", &self.consoles_path)
            .finish()
    }
}
