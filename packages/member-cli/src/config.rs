use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;

const DEFAULT_DATA: &str = "public/data.json";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Lookup file location, URL or path
    pub data: String,
    pub http_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_vars(
            env::var("MEMBERSHIP_DATA").ok(),
            env::var("MEMBERSHIP_HTTP_TIMEOUT_SECS").ok(),
        )
    }

    fn from_vars(data: Option<String>, timeout: Option<String>) -> Result<Self> {
        let http_timeout = match timeout {
            Some(secs) => secs
                .trim()
                .parse()
                .context("MEMBERSHIP_HTTP_TIMEOUT_SECS must be a whole number of seconds")?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            data: data
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DATA.to_string()),
            http_timeout: Duration::from_secs(http_timeout),
        })
    }

    /// Apply a `--data` override
    pub fn with_data(mut self, data: Option<String>) -> Self {
        if let Some(data) = data {
            self.data = data;
        }
        self
    }
}
