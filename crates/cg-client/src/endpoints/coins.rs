//! Coin listing and detail endpoints

use super::{impl_endpoint_base, require, EndpointBase};
use crate::query::{with_query, CoinsQueryOptions};
use crate::response::ApiResponse;
use crate::transport::Transport;
use cg_core::Result;
use cg_models::coins::Coin;
use cg_models::markets::CoinMarket;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Coin endpoints
pub struct CoinsEndpoints {
  transport: Arc<Transport>,
}

impl CoinsEndpoints {
  /// Create a new coins endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List coins with price, market cap, volume and related market data
  ///
  /// Rows come back in the order the API returns them; `order` in the
  /// options is passed through, not applied locally.
  ///
  /// # Arguments
  ///
  /// * `vs_currency` - The quote currency (e.g., "usd", "eur", "btc")
  /// * `options` - Optional filters, paging and sort order
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cg_client::{CoinGeckoClient, CoinsQueryOptions, CoinsOrder};
  /// # async fn run(client: CoinGeckoClient) -> cg_client::Result<()> {
  /// let options = CoinsQueryOptions::new().with_order(CoinsOrder::VolumeDesc).with_page(10, 1);
  /// let markets = client.coins().markets("usd", Some(&options)).await?;
  /// for coin in markets.iter() {
  ///     println!("{}: {:?}", coin.name, coin.current_price);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  pub async fn markets(
    &self,
    vs_currency: &str,
    options: Option<&CoinsQueryOptions>,
  ) -> Result<ApiResponse<Vec<CoinMarket>>> {
    self.markets_with_token(&CancellationToken::new(), vs_currency, options).await
  }

  /// List coin markets, aborting if `cancel` fires
  #[instrument(skip(self, cancel, options))]
  pub async fn markets_with_token(
    &self,
    cancel: &CancellationToken,
    vs_currency: &str,
    options: Option<&CoinsQueryOptions>,
  ) -> Result<ApiResponse<Vec<CoinMarket>>> {
    require(vs_currency, "target currency")?;

    let params = match options {
      Some(options) => options.market_params(vs_currency),
      None => CoinsQueryOptions::default().market_params(vs_currency),
    };
    let response: ApiResponse<Vec<CoinMarket>> =
      self.fetch(cancel, &with_query("coins/markets", &params)).await?;

    debug!("Received {} market rows", response.len());
    Ok(response)
  }

  /// Get current data for a coin: name, price, market data, tickers and more
  ///
  /// # Arguments
  ///
  /// * `id` - CoinGecko coin id (e.g., "bitcoin")
  /// * `options` - Optional section flags; only flags that are set are sent
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cg_client::{CoinGeckoClient, CoinsQueryOptions};
  /// # async fn run(client: CoinGeckoClient) -> cg_client::Result<()> {
  /// let options = CoinsQueryOptions::new().with_detail_sections(false, false, true, false, false);
  /// let bitcoin = client.coins().coin("bitcoin", Some(&options)).await?;
  /// let usd = bitcoin.market_data.as_ref().and_then(|m| m.price_in("usd"));
  /// println!("{}: {:?}", bitcoin.name, usd);
  /// # Ok(())
  /// # }
  /// ```
  pub async fn coin(
    &self,
    id: &str,
    options: Option<&CoinsQueryOptions>,
  ) -> Result<ApiResponse<Coin>> {
    self.coin_with_token(&CancellationToken::new(), id, options).await
  }

  /// Get coin detail, aborting if `cancel` fires
  #[instrument(skip(self, cancel, options))]
  pub async fn coin_with_token(
    &self,
    cancel: &CancellationToken,
    id: &str,
    options: Option<&CoinsQueryOptions>,
  ) -> Result<ApiResponse<Coin>> {
    require(id, "target coin id")?;

    let path = format!("coins/{}", urlencoding::encode(id));
    let params = options.map(CoinsQueryOptions::coin_params).unwrap_or_default();

    self.fetch(cancel, &with_query(&path, &params)).await
  }
}

impl_endpoint_base!(CoinsEndpoints);
