use thiserror::Error;

/// Errors returned by the eBay Finding API client.
#[derive(Debug, Error)]
pub enum EbayError {
    /// No application id was configured. Raised at client construction,
    /// before any request is made.
    #[error("missing eBay application id (set EBAY_APP_ID)")]
    MissingAppId,

    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status}")]
    UnexpectedStatus { status: u16 },

    /// The response body is not JSON.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The JSON body is missing the response envelope or search result.
    #[error("parse error: {0}")]
    Parse(String),

    /// The Finding API answered with `ack: Failure`.
    #[error("eBay API error: {0}")]
    ApiError(String),
}
