//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;

use crate::services::aggregator::MAX_STREAK_LOOKBACK_DAYS;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,
    /// Default number of leaderboard entries when a request gives none
    pub leaderboard_limit: i64,
    /// Upper bound on the backward walk when computing streaks
    pub streak_max_lookback_days: u32,
    /// Largest number of rows accepted in one request
    pub max_records_per_request: usize,
}

impl Config {
    /// Default config for testing only.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            leaderboard_limit: 5,
            streak_max_lookback_days: MAX_STREAK_LOOKBACK_DAYS,
            max_records_per_request: 10_000,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let leaderboard_limit: i64 = parse_var("LEADERBOARD_LIMIT", 5)?;
        if leaderboard_limit <= 0 {
            return Err(ConfigError::Invalid("LEADERBOARD_LIMIT"));
        }

        let streak_max_lookback_days: u32 =
            parse_var("STREAK_MAX_LOOKBACK_DAYS", MAX_STREAK_LOOKBACK_DAYS)?;
        if streak_max_lookback_days == 0 {
            return Err(ConfigError::Invalid("STREAK_MAX_LOOKBACK_DAYS"));
        }

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: parse_var("PORT", 8080)?,
            leaderboard_limit,
            streak_max_lookback_days,
            max_records_per_request: parse_var("MAX_RECORDS_PER_REQUEST", 10_000)?,
        })
    }
}

/// Read an optional numeric variable, falling back to `default` when unset.
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
