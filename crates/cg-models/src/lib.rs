//! # cg-models
//!
//! Data models for CoinGecko API responses.
//!
//! This crate provides strongly-typed Rust structures for the CoinGecko v3
//! responses used by `cg-client`: the liveness ping, the BTC exchange-rate
//! table, the `/coins/markets` listing and the `/coins/{id}` detail record.
//!
//! ## Features
//!
//! - **Type Safety**: every response is strongly typed
//! - **Explicit Absence**: numeric fields the API may omit or null are `Option`s,
//!   so a missing value never masquerades as zero
//! - **Forward Compatible**: unknown fields in responses are ignored
//!
//! ## Usage
//!
//! ```ignore
//! use cg_models::{Coin, CoinMarket};
//!
//! let markets: Vec<CoinMarket> = serde_json::from_str(&markets_json)?;
//! let bitcoin: Coin = serde_json::from_str(&coin_json)?;
//! ```

#![warn(clippy::all)]

pub mod coins;
pub mod common;
mod de;
pub mod exchange_rates;
pub mod markets;
pub mod params;
pub mod util;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use coins::*;
pub use exchange_rates::*;
pub use markets::*;
pub use params::*;
pub use util::*;
