use std::path::PathBuf;

use crate::app_config::{
    AppConfig, Environment, DEFAULT_EBAY_BASE_URL, DEFAULT_EBAY_CATEGORY_ID, DEFAULT_USER_AGENT,
};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, raw: &str| -> Result<u64, ConfigError> {
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Blank credentials count as missing so `EBAY_APP_ID=` in a `.env`
    // template does not reach the API as an empty app name.
    let ebay_app_id = lookup("EBAY_APP_ID")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let env = parse_environment(&or_default("RETROTRACK_ENV", "development"))?;
    let log_level = or_default("RETROTRACK_LOG_LEVEL", "info");
    let ebay_base_url = or_default("RETROTRACK_EBAY_BASE_URL", DEFAULT_EBAY_BASE_URL);
    let ebay_category_id = or_default("RETROTRACK_EBAY_CATEGORY_ID", DEFAULT_EBAY_CATEGORY_ID);
    let user_agent = or_default("RETROTRACK_USER_AGENT", DEFAULT_USER_AGENT);

    let request_timeout_secs = match lookup("RETROTRACK_REQUEST_TIMEOUT_SECS") {
        Ok(raw) => Some(parse_u64("RETROTRACK_REQUEST_TIMEOUT_SECS", &raw)?),
        Err(_) => None,
    };
    let inter_request_delay_ms = parse_u64(
        "RETROTRACK_INTER_REQUEST_DELAY_MS",
        &or_default("RETROTRACK_INTER_REQUEST_DELAY_MS", "1000"),
    )?;
    let consoles_path = lookup("RETROTRACK_CONSOLES_PATH").ok().map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        ebay_app_id,
        ebay_base_url,
        ebay_category_id,
        request_timeout_secs,
        user_agent,
        inter_request_delay_ms,
        consoles_path,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "RETROTRACK_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
