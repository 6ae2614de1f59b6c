//! Configuration management for the market-data client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the market-data client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// API key, sent as the `apiKey` query parameter
  pub api_key: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Base URL for the REST API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let api_key = env::var("MDAPI_API_KEY")
      .map_err(|_| Error::ApiKey("MDAPI_API_KEY not set".to_string()))?;

    let timeout_secs = env::var("MDAPI_TIMEOUT_SECS")
      .unwrap_or_else(|_| crate::DEFAULT_TIMEOUT_SECS.to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid MDAPI_TIMEOUT_SECS".to_string()))?;

    let base_url =
      env::var("MDAPI_BASE_URL").unwrap_or_else(|_| crate::DEFAULT_BASE_URL.to_string());

    Ok(Config { api_key, timeout_secs, base_url })
  }

  /// Create a config with default values (for testing)
  pub fn default_with_key(api_key: String) -> Self {
    Config {
      api_key,
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      base_url: crate::DEFAULT_BASE_URL.to_string(),
    }
  }

  /// Same config pointed at another host, e.g. a mock server
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("MDAPI_API_KEY", "test_key");
    let config = Config::from_env().unwrap();
    assert_eq!(config.api_key, "test_key");
    assert_eq!(config.timeout_secs, 30);
  }

  #[test]
  fn test_default_with_key() {
    let config = Config::default_with_key("k".to_string()).with_base_url("http://localhost:1234");
    assert_eq!(config.api_key, "k");
    assert_eq!(config.base_url, "http://localhost:1234");
    assert_eq!(config.timeout_secs, crate::DEFAULT_TIMEOUT_SECS);
  }
}
