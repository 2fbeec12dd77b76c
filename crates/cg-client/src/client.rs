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

//! The top-level client handing out endpoint groups

use crate::endpoints::{
  coins::CoinsEndpoints, exchange_rates::ExchangeRateEndpoints, util::UtilEndpoints,
};
use crate::transport::Transport;
use cg_core::{Config, Result};
use std::sync::Arc;
use url::Url;

/// Main CoinGecko API client
///
/// Provides access to the CoinGecko API endpoints through organized endpoint
/// modules. All of them share one [`Transport`], so the client is cheap to
/// hand out and safe to use from concurrent tasks.
///
/// # Examples
///
/// ```rust,no_run
/// use cg_client::{CoinGeckoClient, Config};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinGeckoClient::new(Config::default())?;
///
///     let ping = client.util().ping().await?;
///     println!("{}", ping.status);
///
///     let markets = client.coins().markets("usd", None).await?;
///     println!("{} coins listed", markets.len());
///
///     Ok(())
/// }
/// ```
pub struct CoinGeckoClient {
  transport: Arc<Transport>,
}

impl CoinGeckoClient {
  /// Create a new CoinGecko API client
  ///
  /// Builds a default HTTP client from `config`: `timeout_secs` request
  /// timeout (30 s unless changed), reqwest's default redirect policy and the
  /// configured user agent.
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is invalid or the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport })
  }

  /// Create a client around a caller-supplied HTTP client
  ///
  /// Use this to control timeouts, proxies or connection pooling. The HTTP
  /// client is taken as is; only the base URL and API key of `config` apply.
  pub fn with_http_client(http_client: reqwest::Client, config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::with_http_client(http_client, &config)?);
    Ok(Self { transport })
  }

  /// Create a client configured from the environment, see [`Config::from_env`]
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env()?)
  }

  /// Get access to utility endpoints (`/ping`)
  pub fn util(&self) -> UtilEndpoints {
    UtilEndpoints::new(self.transport.clone())
  }

  /// Get access to exchange rate endpoints (`/exchange_rates`)
  pub fn exchange_rates(&self) -> ExchangeRateEndpoints {
    ExchangeRateEndpoints::new(self.transport.clone())
  }

  /// Get access to coin endpoints (`/coins/markets`, `/coins/{id}`)
  pub fn coins(&self) -> CoinsEndpoints {
    CoinsEndpoints::new(self.transport.clone())
  }

  /// The transport shared by all endpoints, for requests not covered by them
  pub fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }

  /// Base URL requests are resolved against
  pub fn base_url(&self) -> &Url {
    self.transport.base_url()
  }
}

impl std::fmt::Debug for CoinGeckoClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CoinGeckoClient").field("transport", &self.transport).finish()
  }
}
