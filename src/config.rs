//! Client configuration
//!
//! Loads from a TOML file with per-field defaults, with optional
//! environment overrides (`WALLET_API_URL`, `WALLET_API_TIMEOUT_SECS`).

use serde::{Deserialize, Serialize};

/// Wallet client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the wallet node
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8888".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ClientConfig {
    /// Create a config for a given base URL with default timeout
    pub fn for_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    ///
    /// Reads `.env` if present, then lets `WALLET_API_URL` and
    /// `WALLET_API_TIMEOUT_SECS` override the file values.
    pub fn from_file_with_env(path: &str) -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = Self::from_file(path)?;
        if let Ok(url) = std::env::var("WALLET_API_URL") {
            config.base_url = url;
        }
        if let Ok(timeout) = std::env::var("WALLET_API_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse()?;
        }
        Ok(config)
    }
}
