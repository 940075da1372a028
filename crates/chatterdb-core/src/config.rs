use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files; use it in tests
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup instead of `set_var`/`remove_var`.
pub(crate) fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let database_url = require("DATABASE_URL")?;
    let env = parse_environment(&or_default("CHATTERDB_ENV", "development"))?;
    let log_level = or_default("CHATTERDB_LOG_LEVEL", "info");
    let watchlist_path = PathBuf::from(or_default("CHATTERDB_WATCHLIST_PATH", "./watchlist.txt"));

    // The SEC rejects requests without a descriptive User-Agent carrying a
    // contact address, so a default is always supplied.
    let sec_user_agent = or_default("SEC_USER_AGENT", "chatterdb/0.1 (contact@example.com)");

    let reddit_client_id = lookup("REDDIT_CLIENT_ID").ok();
    let reddit_client_secret = lookup("REDDIT_CLIENT_SECRET").ok();
    let reddit_user_agent = or_default("REDDIT_USER_AGENT", "chatterdb:local:v0.1");

    let social_feeds = or_default(
        "CHATTERDB_SOCIAL_FEEDS",
        "wallstreetbets,stocks,options,investing",
    )
    .split(',')
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(str::to_string)
    .collect();

    let db_max_connections = parse_u32("CHATTERDB_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("CHATTERDB_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("CHATTERDB_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    let request_timeout_secs = parse_u64("CHATTERDB_REQUEST_TIMEOUT_SECS", "30")?;
    let edgar_limit_per_ticker = parse_usize("CHATTERDB_EDGAR_LIMIT_PER_TICKER", "25")?;
    let edgar_inter_request_delay_ms = parse_u64("CHATTERDB_EDGAR_INTER_REQUEST_DELAY_MS", "300")?;
    let social_limit_per_feed = parse_usize("CHATTERDB_SOCIAL_LIMIT_PER_FEED", "50")?;

    Ok(AppConfig {
        database_url,
        env,
        log_level,
        watchlist_path,
        sec_user_agent,
        reddit_client_id,
        reddit_client_secret,
        reddit_user_agent,
        social_feeds,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
        request_timeout_secs,
        edgar_limit_per_ticker,
        edgar_inter_request_delay_ms,
        social_limit_per_feed,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

fn parse_environment(raw: &str) -> Result<Environment, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "CHATTERDB_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}
