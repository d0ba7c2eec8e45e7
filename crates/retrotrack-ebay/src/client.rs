//! HTTP client for the eBay Finding API.
//!
//! Wraps `reqwest` with credential handling and query construction. Per-call
//! failures are folded into [`ConsoleResult::Failed`] by
//! [`EbayClient::search_console`]; only construction can fail outright.

use std::time::Duration;

use reqwest::{Client, Url};
use retrotrack_core::app_config::{
    DEFAULT_EBAY_BASE_URL, DEFAULT_EBAY_CATEGORY_ID, DEFAULT_USER_AGENT,
};
use retrotrack_core::{AppConfig, ConsoleResult};
use serde_json::Value;

use crate::error::EbayError;
use crate::normalize::normalize_response;
use crate::query::SearchQuery;

/// Settings an [`EbayClient`] is built from.
#[derive(Clone)]
pub struct EbayConfig {
    pub app_id: Option<String>,
    pub base_url: String,
    pub category_id: String,
    /// Total per-request timeout. `None` keeps reqwest's default (no timeout).
    pub request_timeout: Option<Duration>,
    pub user_agent: String,
}

impl EbayConfig {
    /// Production defaults with the given application id.
    #[must_use]
    pub fn new(app_id: &str) -> Self {
        Self {
            app_id: Some(app_id.to_owned()),
            base_url: DEFAULT_EBAY_BASE_URL.to_owned(),
            category_id: DEFAULT_EBAY_CATEGORY_ID.to_owned(),
            request_timeout: None,
            user_agent: DEFAULT_USER_AGENT.to_owned(),
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            app_id: config.ebay_app_id.clone(),
            base_url: config.ebay_base_url.clone(),
            category_id: config.ebay_category_id.clone(),
            request_timeout: config.request_timeout_secs.map(Duration::from_secs),
            user_agent: config.user_agent.clone(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        base_url.clone_into(&mut self.base_url);
        self
    }
}

impl std::fmt::Debug for EbayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EbayConfig")
            .field("app_id", &self.app_id.as_ref().map(|_| "[redacted]"))
            .field("base_url", &self.base_url)
            .field("category_id", &self.category_id)
            .field("request_timeout", &self.request_timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// Client for the eBay Finding API `findCompletedItems` operation.
///
/// Holds the application id for its whole lifetime. Use
/// [`EbayConfig::with_base_url`] to point it at a mock server in tests.
pub struct EbayClient {
    client: Client,
    app_id: String,
    base_url: Url,
    category_id: String,
}

impl EbayClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// - [`EbayError::MissingAppId`] if `config.app_id` is absent or blank.
    ///   Checked before anything else, so no request is ever attempted.
    /// - [`EbayError::InvalidBaseUrl`] if `config.base_url` does not parse.
    /// - [`EbayError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed.
    pub fn new(config: EbayConfig) -> Result<Self, EbayError> {
        let app_id = config
            .app_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(EbayError::MissingAppId)?
            .to_owned();

        let base_url = Url::parse(&config.base_url).map_err(|e| EbayError::InvalidBaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;

        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            app_id,
            base_url,
            category_id: config.category_id,
        })
    }

    /// Builds the query for `console` using this client's category.
    #[must_use]
    pub fn query(&self, console: &str, condition: Option<&str>) -> SearchQuery {
        SearchQuery::new(console, &self.category_id).with_condition(condition)
    }

    /// Searches completed listings for one console.
    ///
    /// Transport failures, non-2xx statuses, and malformed bodies are traced at
    /// debug level and returned as [`ConsoleResult::Failed`]; reporting them is
    /// left to the caller. This never returns an error.
    pub async fn search_console(&self, console: &str, condition: Option<&str>) -> ConsoleResult {
        let query = self.query(console, condition);

        let result = match self.fetch_completed_items(&query).await {
            Ok(payload) => normalize_response(&payload, console),
            Err(e) => ConsoleResult::failed(console, e.to_string()),
        };

        if let Some(error) = result.error() {
            tracing::debug!(console, error, "eBay search failed");
        } else {
            tracing::debug!(
                console,
                listings = result.listings().len(),
                "eBay search completed"
            );
        }

        result
    }

    /// Sends one `findCompletedItems` request and returns the raw JSON body.
    ///
    /// # Errors
    ///
    /// - [`EbayError::Http`] on network failure.
    /// - [`EbayError::UnexpectedStatus`] on a non-2xx status.
    /// - [`EbayError::Deserialize`] if the body is not valid JSON.
    pub async fn fetch_completed_items(&self, query: &SearchQuery) -> Result<Value, EbayError> {
        let url = self.build_url(query);

        // reqwest embeds the request URL in its errors; strip it so the app
        // id in the query string never reaches the logs.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| EbayError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EbayError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| EbayError::Http(e.without_url()))?;
        serde_json::from_str(&body).map_err(|e| EbayError::Deserialize {
            context: format!("findCompletedItems(keywords={})", query.console),
            source: e,
        })
    }

    /// Builds the request URL with percent-encoded query parameters.
    fn build_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.base_url.clone();
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.params(&self.app_id) {
                pairs.append_pair(key, &value);
            }
        }
        url
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
