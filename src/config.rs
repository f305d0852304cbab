//! Configuration Module
//!
//! Handles loading and managing client configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::cache::{CACHE_DURATION_MS, LONG_CACHE_DURATION_MS};

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Default TTL in milliseconds for cached list responses
    pub default_ttl_ms: u64,
    /// TTL in milliseconds for aggregate/statistics responses
    pub long_ttl_ms: u64,
    /// Maximum number of entries the durable store may hold
    pub durable_capacity: usize,
    /// Path of the durable cache file; in-memory store when unset
    pub cache_file: Option<PathBuf>,
    /// Base URL of the club API
    pub api_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL_MS` - Default TTL in milliseconds (default: 300000, 5 minutes)
    /// - `LONG_CACHE_TTL_MS` - Stats TTL in milliseconds (default: 900000, 15 minutes)
    /// - `CACHE_CAPACITY` - Maximum durable entries (default: 500)
    /// - `CACHE_FILE` - Durable cache file path (default: unset, in-memory)
    /// - `API_BASE_URL` - Club API base URL (default: http://localhost:8002/api)
    pub fn from_env() -> Self {
        Self {
            default_ttl_ms: env::var("CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(CACHE_DURATION_MS),
            long_ttl_ms: env::var("LONG_CACHE_TTL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(LONG_CACHE_DURATION_MS),
            durable_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            cache_file: env::var("CACHE_FILE").ok().map(PathBuf::from),
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8002/api".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_ttl_ms: CACHE_DURATION_MS,
            long_ttl_ms: LONG_CACHE_DURATION_MS,
            durable_capacity: 500,
            cache_file: None,
            api_base_url: "http://localhost:8002/api".to_string(),
        }
    }
}
