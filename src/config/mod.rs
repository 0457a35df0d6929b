//! Environment-backed configuration.

use crate::services::chart_api::DEFAULT_BASE_URL;
use std::env;

pub const DEFAULT_CACHE_TTL_HOURS: i64 = 6;
pub const DEFAULT_CACHE_DB_PATH: &str = "equisight_cache.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub cache_ttl_hours: i64,
    pub cache_db_path: String,
    pub chart_api_base_url: String,
}

impl Config {
    /// Load configuration from the environment (after `.env`), falling
    /// back to defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            cache_ttl_hours: env::var("CACHE_TTL_HOURS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_HOURS),
            cache_db_path: env::var("CACHE_DB_PATH")
                .unwrap_or_else(|_| DEFAULT_CACHE_DB_PATH.to_string()),
            chart_api_base_url: env::var("CHART_API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl_hours: DEFAULT_CACHE_TTL_HOURS,
            cache_db_path: DEFAULT_CACHE_DB_PATH.to_string(),
            chart_api_base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Deployment environment name, driving the log formatter choice.
pub fn get_environment() -> String {
    env::var("EQUISIGHT_ENV").unwrap_or_else(|_| "development".to_string())
}
