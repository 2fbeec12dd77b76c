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

//! Closed value sets accepted by the `/coins` query parameters.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sort order for `/coins/markets`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinsOrder {
  GeckoAsc,
  GeckoDesc,
  IdAsc,
  IdDesc,
  MarketCapAsc,
  #[default]
  MarketCapDesc,
  VolumeAsc,
  VolumeDesc,
}

impl CoinsOrder {
  /// Wire encoding of the order
  pub fn as_str(&self) -> &'static str {
    match self {
      CoinsOrder::GeckoAsc => "gecko_asc",
      CoinsOrder::GeckoDesc => "gecko_desc",
      CoinsOrder::IdAsc => "id_asc",
      CoinsOrder::IdDesc => "id_desc",
      CoinsOrder::MarketCapAsc => "market_cap_asc",
      CoinsOrder::MarketCapDesc => "market_cap_desc",
      CoinsOrder::VolumeAsc => "volume_asc",
      CoinsOrder::VolumeDesc => "volume_desc",
    }
  }
}

impl std::fmt::Display for CoinsOrder {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for CoinsOrder {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "gecko_asc" => Ok(CoinsOrder::GeckoAsc),
      "gecko_desc" => Ok(CoinsOrder::GeckoDesc),
      "id_asc" => Ok(CoinsOrder::IdAsc),
      "id_desc" => Ok(CoinsOrder::IdDesc),
      "market_cap_asc" => Ok(CoinsOrder::MarketCapAsc),
      "market_cap_desc" => Ok(CoinsOrder::MarketCapDesc),
      "volume_asc" => Ok(CoinsOrder::VolumeAsc),
      "volume_desc" => Ok(CoinsOrder::VolumeDesc),
      other => Err(format!("unknown coins order: {other}")),
    }
  }
}

/// Lookback window for price change percentages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PriceChangeWindow {
  #[serde(rename = "1h")]
  OneHour,
  #[serde(rename = "24h")]
  OneDay,
  #[serde(rename = "7d")]
  SevenDays,
  #[serde(rename = "14d")]
  FourteenDays,
  #[serde(rename = "30d")]
  ThirtyDays,
  #[serde(rename = "200d")]
  TwoHundredDays,
  #[serde(rename = "1y")]
  OneYear,
}

impl PriceChangeWindow {
  /// Every window, shortest first
  pub const ALL: [PriceChangeWindow; 7] = [
    PriceChangeWindow::OneHour,
    PriceChangeWindow::OneDay,
    PriceChangeWindow::SevenDays,
    PriceChangeWindow::FourteenDays,
    PriceChangeWindow::ThirtyDays,
    PriceChangeWindow::TwoHundredDays,
    PriceChangeWindow::OneYear,
  ];

  /// Windows requested by `/coins/markets` when the caller names none
  pub const DEFAULT_SET: [PriceChangeWindow; 5] = [
    PriceChangeWindow::OneHour,
    PriceChangeWindow::OneDay,
    PriceChangeWindow::SevenDays,
    PriceChangeWindow::FourteenDays,
    PriceChangeWindow::ThirtyDays,
  ];

  /// Wire encoding of the window
  pub fn as_str(&self) -> &'static str {
    match self {
      PriceChangeWindow::OneHour => "1h",
      PriceChangeWindow::OneDay => "24h",
      PriceChangeWindow::SevenDays => "7d",
      PriceChangeWindow::FourteenDays => "14d",
      PriceChangeWindow::ThirtyDays => "30d",
      PriceChangeWindow::TwoHundredDays => "200d",
      PriceChangeWindow::OneYear => "1y",
    }
  }

  /// Comma-joined encoding of a set of windows, duplicates dropped, first occurrence kept
  pub fn join(windows: &[PriceChangeWindow]) -> String {
    let mut seen = Vec::with_capacity(windows.len());
    for window in windows {
      if !seen.contains(window) {
        seen.push(*window);
      }
    }
    seen.iter().map(PriceChangeWindow::as_str).collect::<Vec<_>>().join(",")
  }
}

impl std::fmt::Display for PriceChangeWindow {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for PriceChangeWindow {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "1h" => Ok(PriceChangeWindow::OneHour),
      "24h" => Ok(PriceChangeWindow::OneDay),
      "7d" => Ok(PriceChangeWindow::SevenDays),
      "14d" => Ok(PriceChangeWindow::FourteenDays),
      "30d" => Ok(PriceChangeWindow::ThirtyDays),
      "200d" => Ok(PriceChangeWindow::TwoHundredDays),
      "1y" => Ok(PriceChangeWindow::OneYear),
      other => Err(format!("unknown price change window: {other}")),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_order_encoding() {
    assert_eq!(CoinsOrder::default(), CoinsOrder::MarketCapDesc);
    assert_eq!(CoinsOrder::VolumeAsc.to_string(), "volume_asc");
    assert_eq!("GECKO_DESC".parse::<CoinsOrder>().unwrap(), CoinsOrder::GeckoDesc);
    assert!("price_desc".parse::<CoinsOrder>().is_err());
    assert_eq!(serde_json::to_string(&CoinsOrder::IdDesc).unwrap(), "\"id_desc\"");
  }

  #[test]
  fn test_window_encoding() {
    for window in PriceChangeWindow::ALL {
      assert_eq!(window.as_str().parse::<PriceChangeWindow>().unwrap(), window);
      assert_eq!(serde_json::to_string(&window).unwrap(), format!("\"{}\"", window.as_str()));
    }
    assert!("2w".parse::<PriceChangeWindow>().is_err());
  }

  #[test]
  fn test_join_windows() {
    assert_eq!(PriceChangeWindow::join(&PriceChangeWindow::DEFAULT_SET), "1h,24h,7d,14d,30d");
    assert_eq!(
      PriceChangeWindow::join(&[
        PriceChangeWindow::OneYear,
        PriceChangeWindow::OneHour,
        PriceChangeWindow::OneYear
      ]),
      "1y,1h"
    );
    assert_eq!(PriceChangeWindow::join(&[]), "");
  }
}
