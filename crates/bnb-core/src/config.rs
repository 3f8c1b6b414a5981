//! Configuration management for the Airbnb client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use url::Url;

/// Main configuration struct for the Airbnb client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// Application client id, used for basic auth and the API key header
  pub client_id: String,

  /// Application client secret
  pub client_secret: String,

  /// Application name sent as the User-Agent
  pub app_name: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,

  /// Maximum retries for failed requests
  pub max_retries: u32,

  /// Base URL for the Airbnb API
  pub base_url: String,
}

impl Config {
  /// Load configuration from environment variables
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let client_id = env::var("AIRBNB_CLIENT_ID")
      .map_err(|_| Error::Credentials("AIRBNB_CLIENT_ID not set".to_string()))?;

    let client_secret = env::var("AIRBNB_CLIENT_SECRET")
      .map_err(|_| Error::Credentials("AIRBNB_CLIENT_SECRET not set".to_string()))?;

    let app_name =
      env::var("AIRBNB_APP_NAME").unwrap_or_else(|_| crate::DEFAULT_APP_NAME.to_string());

    let timeout_secs = env::var("AIRBNB_TIMEOUT_SECS")
      .unwrap_or_else(|_| "30".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid AIRBNB_TIMEOUT_SECS".to_string()))?;

    let max_retries = env::var("AIRBNB_MAX_RETRIES")
      .unwrap_or_else(|_| "3".to_string())
      .parse()
      .map_err(|_| Error::Config("Invalid AIRBNB_MAX_RETRIES".to_string()))?;

    let base_url = env::var("AIRBNB_BASE_URL").unwrap_or_else(|_| crate::AIRBNB_BASE_URL.to_string());

    let config = Config { client_id, client_secret, app_name, timeout_secs, max_retries, base_url };
    config.validate()?;
    Ok(config)
  }

  /// Create a config with default values around a credential pair
  pub fn with_credentials(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
    Config {
      client_id: client_id.into(),
      client_secret: client_secret.into(),
      app_name: crate::DEFAULT_APP_NAME.to_string(),
      timeout_secs: 30,
      max_retries: 3,
      base_url: crate::AIRBNB_BASE_URL.to_string(),
    }
  }

  /// Point the config at another API root (sandbox, mock server)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Check that the credentials are present and the base URL parses
  pub fn validate(&self) -> Result<()> {
    if self.client_id.trim().is_empty() || self.client_secret.trim().is_empty() {
      return Err(Error::Credentials("client id and secret must not be empty".to_string()));
    }
    Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;
    Ok(())
  }
}

impl fmt::Debug for Config {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Config")
      .field("client_id", &self.client_id)
      .field("client_secret", &"<redacted>")
      .field("app_name", &self.app_name)
      .field("timeout_secs", &self.timeout_secs)
      .field("max_retries", &self.max_retries)
      .field("base_url", &self.base_url)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("AIRBNB_CLIENT_ID", "test_id");
    env::set_var("AIRBNB_CLIENT_SECRET", "test_secret");
    let config = Config::from_env().unwrap();
    assert_eq!(config.client_id, "test_id");
    assert_eq!(config.client_secret, "test_secret");
    assert_eq!(config.max_retries, 3);
  }

  #[test]
  fn test_with_credentials_defaults() {
    let config = Config::with_credentials("id", "secret");
    assert_eq!(config.base_url, crate::AIRBNB_BASE_URL);
    assert_eq!(config.timeout_secs, 30);
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_validate_rejects_bad_values() {
    assert!(matches!(Config::with_credentials("", "secret").validate(), Err(Error::Credentials(_))));
    let config = Config::with_credentials("id", "secret").with_base_url("not a url");
    assert!(matches!(config.validate(), Err(Error::Config(_))));
  }

  #[test]
  fn test_debug_redacts_secret() {
    let rendered = format!("{:?}", Config::with_credentials("id", "hunter2"));
    assert!(!rendered.contains("hunter2"));
  }
}
