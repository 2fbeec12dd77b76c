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

//! Types shared by several CoinGecko responses

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Values keyed by lowercase currency code, e.g. `"usd"`
pub type CurrencyMap = HashMap<String, f64>;

/// Text keyed by currency code, used for per-currency dates
pub type CurrencyDateMap = HashMap<String, String>;

/// Text keyed by locale code, e.g. `"en"`, `"de"`
pub type LocaleMap = HashMap<String, String>;

/// Return on investment since the coin's ICO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Roi {
  /// Multiple of the initial price
  pub times: f64,

  /// Reference currency of the ICO price
  pub currency: String,

  /// Return as a percentage
  pub percentage: f64,
}

/// Logo URLs at three sizes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
  #[serde(default)]
  pub thumb: Option<String>,

  #[serde(default)]
  pub small: Option<String>,

  #[serde(default)]
  pub large: Option<String>,
}

/// Recent price series, hourly points over the last seven days
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub price: Vec<f64>,
}

impl Sparkline {
  /// Most recent price in the series
  pub fn last(&self) -> Option<f64> {
    self.price.last().copied()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_image_missing_sizes() {
    let image: Image = serde_json::from_str(r#"{"thumb":"t.png","large":null}"#).unwrap();
    assert_eq!(image.thumb.as_deref(), Some("t.png"));
    assert!(image.small.is_none());
    assert!(image.large.is_none());
  }

  #[test]
  fn test_sparkline_last() {
    let sparkline: Sparkline = serde_json::from_str(r#"{"price":[1.0,2.5,3.25]}"#).unwrap();
    assert_eq!(sparkline.last(), Some(3.25));
    assert_eq!(Sparkline::default().last(), None);
  }
}
