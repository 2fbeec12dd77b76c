//! Exchange rate endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::response::ApiResponse;
use crate::transport::Transport;
use cg_core::Result;
use cg_models::exchange_rates::ExchangeRates;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Exchange rate endpoints
pub struct ExchangeRateEndpoints {
  transport: Arc<Transport>,
}

impl ExchangeRateEndpoints {
  /// Create a new exchange rate endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get BTC-to-currency exchange rates
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cg_client::CoinGeckoClient;
  /// # async fn run(client: CoinGeckoClient) -> cg_client::Result<()> {
  /// let rates = client.exchange_rates().exchange_rates().await?;
  /// if let Some(usd) = rates.get("usd") {
  ///     println!("1 BTC = {} {}", usd.value, usd.unit);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  pub async fn exchange_rates(&self) -> Result<ApiResponse<ExchangeRates>> {
    self.exchange_rates_with_token(&CancellationToken::new()).await
  }

  /// Get BTC-to-currency exchange rates, aborting if `cancel` fires
  #[instrument(skip(self, cancel))]
  pub async fn exchange_rates_with_token(
    &self,
    cancel: &CancellationToken,
  ) -> Result<ApiResponse<ExchangeRates>> {
    let response: ApiResponse<ExchangeRates> = self.fetch(cancel, "exchange_rates").await?;
    debug!("Received {} exchange rates", response.rates.len());
    Ok(response)
  }
}

impl_endpoint_base!(ExchangeRateEndpoints);
