//! Endpoint groups, one per area of the CoinGecko API

pub mod coins;
pub mod exchange_rates;
pub mod util;

use crate::response::ApiResponse;
use crate::transport::Transport;
use cg_core::Result;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Base trait for endpoint implementations
///
/// Provides common functionality needed by all endpoint modules
pub(crate) trait EndpointBase {
  /// Get a reference to the transport layer
  fn transport(&self) -> &Arc<Transport>;

  /// GET a relative path and decode the JSON body
  async fn fetch<T>(&self, cancel: &CancellationToken, relative_path: &str) -> Result<ApiResponse<T>>
  where
    T: DeserializeOwned,
  {
    self.transport().get(cancel, relative_path).await
  }
}

/// Macro to implement the EndpointBase trait for endpoint structs
macro_rules! impl_endpoint_base {
  ($struct_name:ident) => {
    impl EndpointBase for $struct_name {
      fn transport(&self) -> &Arc<Transport> {
        &self.transport
      }
    }
  };
}

pub(crate) use impl_endpoint_base;

/// Reject an empty required argument before anything touches the network
pub(crate) fn require(value: &str, what: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(cg_core::Error::Validation(format!("{} is required", what)));
  }
  Ok(())
}
