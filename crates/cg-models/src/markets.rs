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

//! Rows of the `/coins/markets` listing

use crate::common::{Roi, Sparkline};
use crate::params::PriceChangeWindow;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One coin's market summary against the requested vs-currency.
///
/// Every figure the API may omit or send as `null` is an `Option`; a coin
/// without an ROI record or a 200d change simply has `None` there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMarket {
  /// CoinGecko identifier, e.g. `"bitcoin"`
  pub id: String,

  /// Ticker symbol, e.g. `"btc"`
  pub symbol: String,

  /// Display name
  pub name: String,

  /// Logo URL
  #[serde(default)]
  pub image: Option<String>,

  #[serde(default)]
  pub current_price: Option<f64>,

  #[serde(default)]
  pub market_cap: Option<f64>,

  #[serde(default)]
  pub market_cap_rank: Option<u32>,

  #[serde(default)]
  pub fully_diluted_valuation: Option<f64>,

  #[serde(default)]
  pub total_volume: Option<f64>,

  #[serde(default)]
  pub high_24h: Option<f64>,

  #[serde(default)]
  pub low_24h: Option<f64>,

  #[serde(default)]
  pub price_change_24h: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_24h: Option<f64>,

  #[serde(default)]
  pub market_cap_change_24h: Option<f64>,

  #[serde(default)]
  pub market_cap_change_percentage_24h: Option<f64>,

  #[serde(default)]
  pub circulating_supply: Option<f64>,

  #[serde(default)]
  pub total_supply: Option<f64>,

  #[serde(default)]
  pub max_supply: Option<f64>,

  /// All-time high price
  #[serde(default)]
  pub ath: Option<f64>,

  #[serde(default)]
  pub ath_change_percentage: Option<f64>,

  #[serde(default)]
  pub ath_date: Option<DateTime<Utc>>,

  /// All-time low price
  #[serde(default)]
  pub atl: Option<f64>,

  #[serde(default)]
  pub atl_change_percentage: Option<f64>,

  #[serde(default)]
  pub atl_date: Option<DateTime<Utc>>,

  /// Return on investment, only present for coins with an ICO price
  #[serde(default)]
  pub roi: Option<Roi>,

  #[serde(default)]
  pub last_updated: Option<DateTime<Utc>>,

  /// Seven-day price series, only present when `sparkline=true`
  #[serde(default)]
  pub sparkline_in_7d: Option<Sparkline>,

  // Present only for windows named in `price_change_percentage`
  #[serde(default)]
  pub price_change_percentage_1h_in_currency: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_24h_in_currency: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_7d_in_currency: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_14d_in_currency: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_30d_in_currency: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_200d_in_currency: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_1y_in_currency: Option<f64>,
}

impl CoinMarket {
  /// In-currency price change for a lookback window, if it was requested and reported
  pub fn price_change_percentage(&self, window: PriceChangeWindow) -> Option<f64> {
    match window {
      PriceChangeWindow::OneHour => self.price_change_percentage_1h_in_currency,
      PriceChangeWindow::OneDay => self.price_change_percentage_24h_in_currency,
      PriceChangeWindow::SevenDays => self.price_change_percentage_7d_in_currency,
      PriceChangeWindow::FourteenDays => self.price_change_percentage_14d_in_currency,
      PriceChangeWindow::ThirtyDays => self.price_change_percentage_30d_in_currency,
      PriceChangeWindow::TwoHundredDays => self.price_change_percentage_200d_in_currency,
      PriceChangeWindow::OneYear => self.price_change_percentage_1y_in_currency,
    }
  }
}
