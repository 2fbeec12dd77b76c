//! # cg-client
//!
//! A typed CoinGecko v3 API client for Rust.
//!
//! ## Features
//!
//! - **Clean API**: endpoint groups hang off one [`CoinGeckoClient`]
//! - **Async/Await**: built on reqwest and tokio
//! - **Cancellable**: every call has a `*_with_token` variant taking a
//!   [`CancellationToken`]; the plain variant uses a token that never fires
//! - **Type Safe**: strongly typed responses using cg-models
//! - **Configurable**: environment-based configuration via cg-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cg_client::{CoinGeckoClient, Config, CoinsQueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinGeckoClient::new(Config::from_env()?)?;
//!
//!     let options = CoinsQueryOptions::new().with_page(10, 1);
//!     let top = client.coins().markets("usd", Some(&options)).await?;
//!     for coin in top.iter() {
//!         println!("{:>4?} {} {:?}", coin.market_cap_rank, coin.name, coin.current_price);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, cg_core::Error>`. Non-2xx responses come
//! back as [`Error::Api`] with the captured response attached, so the body
//! the server sent can still be inspected. Nothing is retried.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod query;
pub mod response;
pub mod transport;

// Re-export the main client and common types
pub use cg_core::{Config, Error, RawResponse, Result};
pub use cg_models::*;
pub use client::CoinGeckoClient;
pub use query::CoinsQueryOptions;
pub use response::ApiResponse;
pub use tokio_util::sync::CancellationToken;
pub use transport::{ApiRequest, Transport};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  coins::CoinsEndpoints, exchange_rates::ExchangeRateEndpoints, util::UtilEndpoints,
};
