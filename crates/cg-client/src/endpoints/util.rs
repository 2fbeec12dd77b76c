//! Utility endpoints

use super::{impl_endpoint_base, EndpointBase};
use crate::response::ApiResponse;
use crate::transport::Transport;
use cg_core::Result;
use cg_models::util::Ping;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

/// Utility endpoints
pub struct UtilEndpoints {
  transport: Arc<Transport>,
}

impl UtilEndpoints {
  /// Create a new utility endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Check API server status
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use cg_client::CoinGeckoClient;
  /// # async fn run(client: CoinGeckoClient) -> cg_client::Result<()> {
  /// let ping = client.util().ping().await?;
  /// println!("{}", ping.status);
  /// # Ok(())
  /// # }
  /// ```
  pub async fn ping(&self) -> Result<ApiResponse<Ping>> {
    self.ping_with_token(&CancellationToken::new()).await
  }

  /// Check API server status, aborting if `cancel` fires
  #[instrument(skip(self, cancel))]
  pub async fn ping_with_token(&self, cancel: &CancellationToken) -> Result<ApiResponse<Ping>> {
    self.fetch(cancel, "ping").await
  }
}

impl_endpoint_base!(UtilEndpoints);
