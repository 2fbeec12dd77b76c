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

//! BTC-to-currency exchange rates returned by `/exchange_rates`

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Exchange rate table keyed by lowercase asset code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
  /// Rates keyed by asset code, e.g. `"usd"`, `"eth"`, `"xau"`
  pub rates: HashMap<String, Rate>,
}

impl ExchangeRates {
  /// Look up a rate by code, case-insensitively
  pub fn get(&self, code: &str) -> Option<&Rate> {
    self.rates.get(&code.to_ascii_lowercase())
  }

  /// Iterate over the rates of one category
  pub fn of_type(&self, rate_type: RateType) -> impl Iterator<Item = (&String, &Rate)> {
    self.rates.iter().filter(move |(_, rate)| rate.rate_type == rate_type)
  }
}

/// One row of the exchange rate table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rate {
  /// Display name, e.g. `"US Dollar"`
  pub name: String,

  /// Unit label, e.g. `"$"`
  pub unit: String,

  /// Amount of this asset worth one BTC
  pub value: f64,

  /// Asset category
  #[serde(rename = "type")]
  pub rate_type: RateType,
}

/// Category tag of an exchange rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateType {
  Fiat,
  Crypto,
  Commodity,
  /// Any category this version does not know about
  #[serde(other)]
  Unknown,
}

impl fmt::Display for RateType {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      RateType::Fiat => write!(f, "fiat"),
      RateType::Crypto => write!(f, "crypto"),
      RateType::Commodity => write!(f, "commodity"),
      RateType::Unknown => write!(f, "unknown"),
    }
  }
}
