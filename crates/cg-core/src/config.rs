/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Configuration management for the CoinGecko client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use url::Url;

/// Main configuration struct for the CoinGecko client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
  /// Base URL for the CoinGecko API, e.g. `https://api.coingecko.com/api/v3/`
  pub base_url: String,

  /// Request timeout in seconds for HTTP clients built from this config
  pub timeout_secs: u64,

  /// User agent sent with every request
  pub user_agent: String,

  /// Optional demo API key
  pub api_key: Option<String>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      base_url: crate::COINGECKO_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
      user_agent: crate::DEFAULT_USER_AGENT.to_string(),
      api_key: None,
    }
  }
}

impl Config {
  /// Load configuration from environment variables, falling back to defaults
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    let defaults = Config::default();

    let base_url = env::var("COINGECKO_BASE_URL").unwrap_or(defaults.base_url);

    let timeout_secs = match env::var("COINGECKO_TIMEOUT_SECS") {
      Ok(raw) => {
        raw.parse().map_err(|_| Error::Config(format!("Invalid COINGECKO_TIMEOUT_SECS: {raw}")))?
      }
      Err(_) => defaults.timeout_secs,
    };

    let user_agent = env::var("COINGECKO_USER_AGENT").unwrap_or(defaults.user_agent);

    let api_key = env::var("COINGECKO_API_KEY").ok().filter(|key| !key.is_empty());

    let config = Config { base_url, timeout_secs, user_agent, api_key };
    config.timeout()?;
    config.parsed_base_url()?;
    Ok(config)
  }

  /// Request timeout as a duration; zero is rejected since it fails every request
  pub fn timeout(&self) -> Result<Duration> {
    if self.timeout_secs == 0 {
      return Err(Error::Config("Timeout must be at least one second".to_string()));
    }
    Ok(Duration::from_secs(self.timeout_secs))
  }

  /// Replace the base URL, e.g. to target a mock server or a mirror
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Parse the base URL, appending the trailing slash relative resolution relies on
  pub fn parsed_base_url(&self) -> Result<Url> {
    let mut url = Url::parse(&self.base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", self.base_url, e)))?;

    if url.cannot_be_a_base() {
      return Err(Error::Config(format!("Base URL cannot be a base: {}", self.base_url)));
    }

    if !url.path().ends_with('/') {
      let path = format!("{}/", url.path());
      url.set_path(&path);
    }

    Ok(url)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.base_url, "https://api.coingecko.com/api/v3/");
    assert_eq!(config.timeout_secs, 30);
    assert!(config.api_key.is_none());
  }

  #[test]
  fn test_parsed_base_url_appends_slash() {
    let config = Config::default().with_base_url("http://127.0.0.1:8080/api/v3");
    let url = config.parsed_base_url().unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/api/v3/");
    assert_eq!(url.join("ping").unwrap().path(), "/api/v3/ping");
  }

  #[test]
  fn test_zero_timeout_rejected() {
    let config = Config { timeout_secs: 0, ..Config::default() };
    assert!(matches!(config.timeout(), Err(Error::Config(_))));
    assert_eq!(Config::default().timeout().unwrap(), Duration::from_secs(30));
  }

  #[test]
  fn test_parsed_base_url_rejects_garbage() {
    let config = Config::default().with_base_url("not a url");
    assert!(matches!(config.parsed_base_url(), Err(Error::Config(_))));
  }

  #[test]
  fn test_config_from_env() {
    env::set_var("COINGECKO_TIMEOUT_SECS", "12");
    env::set_var("COINGECKO_API_KEY", "CG-test");
    let config = Config::from_env().unwrap();
    assert_eq!(config.timeout_secs, 12);
    assert_eq!(config.api_key.as_deref(), Some("CG-test"));

    env::set_var("COINGECKO_TIMEOUT_SECS", "soon");
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));

    env::set_var("COINGECKO_TIMEOUT_SECS", "0");
    assert!(matches!(Config::from_env(), Err(Error::Config(_))));

    env::remove_var("COINGECKO_TIMEOUT_SECS");
    env::remove_var("COINGECKO_API_KEY");
  }
}
