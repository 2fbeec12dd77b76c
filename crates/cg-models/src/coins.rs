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

//! Full per-coin record returned by `/coins/{id}`

use crate::common::{CurrencyDateMap, CurrencyMap, Image, LocaleMap, Roi, Sparkline};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Coin detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
  /// CoinGecko identifier, e.g. `"bitcoin"`
  pub id: String,

  /// Ticker symbol
  pub symbol: String,

  /// Display name
  pub name: String,

  /// Chain hosting the token, `None` for native coins
  #[serde(default)]
  pub asset_platform_id: Option<String>,

  /// Contract addresses keyed by platform id
  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub platforms: HashMap<String, String>,

  #[serde(default)]
  pub block_time_in_minutes: Option<u32>,

  #[serde(default)]
  pub hashing_algorithm: Option<String>,

  /// Category tags, e.g. `"Smart Contract Platform"`
  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub categories: Vec<String>,

  #[serde(default)]
  pub public_notice: Option<String>,

  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub additional_notices: Vec<String>,

  /// Localized names keyed by locale code
  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub localization: LocaleMap,

  /// Localized descriptions keyed by locale code
  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub description: LocaleMap,

  #[serde(default)]
  pub links: Option<Links>,

  #[serde(default)]
  pub image: Option<Image>,

  #[serde(default)]
  pub country_origin: Option<String>,

  /// Genesis date as sent, `YYYY-MM-DD`
  #[serde(default)]
  pub genesis_date: Option<String>,

  #[serde(default)]
  pub contract_address: Option<String>,

  #[serde(default)]
  pub sentiment_votes_up_percentage: Option<f64>,

  #[serde(default)]
  pub sentiment_votes_down_percentage: Option<f64>,

  #[serde(default)]
  pub market_cap_rank: Option<u32>,

  #[serde(default)]
  pub coingecko_rank: Option<u32>,

  #[serde(default)]
  pub coingecko_score: Option<f64>,

  #[serde(default)]
  pub developer_score: Option<f64>,

  #[serde(default)]
  pub community_score: Option<f64>,

  #[serde(default)]
  pub liquidity_score: Option<f64>,

  #[serde(default)]
  pub public_interest_score: Option<f64>,

  /// Present unless `market_data=false`
  #[serde(default)]
  pub market_data: Option<MarketData>,

  /// Present unless `community_data=false`
  #[serde(default)]
  pub community_data: Option<CommunityData>,

  /// Present unless `developer_data=false`
  #[serde(default)]
  pub developer_data: Option<DeveloperData>,

  #[serde(default)]
  pub public_interest_stats: Option<PublicInterestStats>,

  #[serde(default)]
  pub status_updates: Option<Vec<StatusUpdate>>,

  #[serde(default)]
  pub last_updated: Option<DateTime<Utc>>,

  /// Present unless `tickers=false`
  #[serde(default)]
  pub tickers: Option<Vec<Ticker>>,
}

impl Coin {
  /// Description in the given locale, skipping empty entries
  pub fn description_in(&self, locale: &str) -> Option<&str> {
    self.description.get(locale).map(String::as_str).filter(|text| !text.is_empty())
  }

  /// Name in the given locale, falling back to the canonical name
  pub fn name_in(&self, locale: &str) -> &str {
    self
      .localization
      .get(locale)
      .map(String::as_str)
      .filter(|name| !name.is_empty())
      .unwrap_or(self.name.as_str())
  }

  /// First non-empty homepage link
  pub fn homepage(&self) -> Option<&str> {
    self.links.as_ref()?.homepage.iter().map(String::as_str).find(|url| !url.is_empty())
  }
}

/// External links for a coin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Links {
  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub homepage: Vec<String>,

  /// Block explorer URLs
  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub blockchain_site: Vec<String>,

  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub official_forum_url: Vec<String>,

  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub chat_url: Vec<String>,

  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub announcement_url: Vec<String>,

  #[serde(default)]
  pub twitter_screen_name: Option<String>,

  #[serde(default)]
  pub facebook_username: Option<String>,

  #[serde(default)]
  pub bitcointalk_thread_identifier: Option<u64>,

  #[serde(default)]
  pub telegram_channel_identifier: Option<String>,

  #[serde(default)]
  pub subreddit_url: Option<String>,

  #[serde(default)]
  pub repos_url: Option<ReposUrl>,
}

/// Source repositories
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReposUrl {
  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub github: Vec<String>,

  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub bitbucket: Vec<String>,
}

/// Market figures, most of them keyed by vs-currency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub current_price: CurrencyMap,

  #[serde(default)]
  pub roi: Option<Roi>,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub ath: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub ath_change_percentage: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub ath_date: CurrencyDateMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub atl: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub atl_change_percentage: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub atl_date: CurrencyDateMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub market_cap: CurrencyMap,

  #[serde(default)]
  pub market_cap_rank: Option<u32>,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub fully_diluted_valuation: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub total_volume: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub high_24h: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub low_24h: CurrencyMap,

  #[serde(default)]
  pub price_change_24h: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_24h: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_7d: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_14d: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_30d: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_60d: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_200d: Option<f64>,

  #[serde(default)]
  pub price_change_percentage_1y: Option<f64>,

  #[serde(default)]
  pub market_cap_change_24h: Option<f64>,

  #[serde(default)]
  pub market_cap_change_percentage_24h: Option<f64>,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub price_change_24h_in_currency: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub price_change_percentage_1h_in_currency: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub price_change_percentage_24h_in_currency: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub price_change_percentage_7d_in_currency: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub price_change_percentage_14d_in_currency: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub price_change_percentage_30d_in_currency: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub price_change_percentage_60d_in_currency: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub price_change_percentage_200d_in_currency: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub price_change_percentage_1y_in_currency: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub market_cap_change_24h_in_currency: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub market_cap_change_percentage_24h_in_currency: CurrencyMap,

  #[serde(default)]
  pub total_supply: Option<f64>,

  #[serde(default)]
  pub max_supply: Option<f64>,

  #[serde(default)]
  pub circulating_supply: Option<f64>,

  /// Present only when requested with `sparkline=true`
  #[serde(default)]
  pub sparkline_7d: Option<Sparkline>,

  #[serde(default)]
  pub last_updated: Option<DateTime<Utc>>,
}

impl MarketData {
  /// Current price in a vs-currency, e.g. `"usd"`
  pub fn price_in(&self, currency: &str) -> Option<f64> {
    self.current_price.get(currency).copied()
  }

  /// Market cap in a vs-currency
  pub fn market_cap_in(&self, currency: &str) -> Option<f64> {
    self.market_cap.get(currency).copied()
  }

  /// 24h traded volume in a vs-currency
  pub fn volume_in(&self, currency: &str) -> Option<f64> {
    self.total_volume.get(currency).copied()
  }
}

/// Social media statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityData {
  #[serde(default)]
  pub facebook_likes: Option<u64>,

  #[serde(default)]
  pub twitter_followers: Option<u64>,

  #[serde(default)]
  pub reddit_average_posts_48h: Option<f64>,

  #[serde(default)]
  pub reddit_average_comments_48h: Option<f64>,

  #[serde(default)]
  pub reddit_subscribers: Option<u64>,

  #[serde(default)]
  pub reddit_accounts_active_48h: Option<u64>,

  #[serde(default)]
  pub telegram_channel_user_count: Option<u64>,
}

/// Repository activity statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperData {
  #[serde(default)]
  pub forks: Option<u64>,

  #[serde(default)]
  pub stars: Option<u64>,

  #[serde(default)]
  pub subscribers: Option<u64>,

  #[serde(default)]
  pub total_issues: Option<u64>,

  #[serde(default)]
  pub closed_issues: Option<u64>,

  #[serde(default)]
  pub pull_requests_merged: Option<u64>,

  #[serde(default)]
  pub pull_request_contributors: Option<u64>,

  #[serde(default)]
  pub code_additions_deletions_4_weeks: Option<CodeAdditionsDeletions>,

  #[serde(default)]
  pub commit_count_4_weeks: Option<u64>,

  /// Daily commit counts over the last four weeks
  #[serde(default, deserialize_with = "crate::de::vec_skip_nulls")]
  pub last_4_weeks_commit_activity_series: Vec<i64>,
}

/// Lines added and removed over four weeks; deletions are reported negative
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeAdditionsDeletions {
  #[serde(default)]
  pub additions: Option<i64>,

  #[serde(default)]
  pub deletions: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublicInterestStats {
  #[serde(default)]
  pub alexa_rank: Option<u64>,

  #[serde(default)]
  pub bing_matches: Option<u64>,
}

/// Project announcement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusUpdate {
  #[serde(default)]
  pub description: Option<String>,

  #[serde(default)]
  pub category: Option<String>,

  #[serde(default)]
  pub created_at: Option<String>,

  #[serde(default)]
  pub user: Option<String>,

  #[serde(default)]
  pub user_title: Option<String>,

  #[serde(default, deserialize_with = "crate::de::null_as_default")]
  pub pin: bool,

  #[serde(default)]
  pub project: Option<StatusProject>,
}

/// Project a status update belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusProject {
  #[serde(rename = "type", default)]
  pub project_type: Option<String>,

  #[serde(default)]
  pub id: Option<String>,

  #[serde(default)]
  pub name: Option<String>,

  #[serde(default)]
  pub symbol: Option<String>,

  #[serde(default)]
  pub image: Option<Image>,
}

/// Quote for the coin on one exchange venue against one target asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticker {
  /// Base asset as listed by the venue
  pub base: String,

  /// Quote asset as listed by the venue
  pub target: String,

  pub market: TickerMarket,

  #[serde(default)]
  pub last: Option<f64>,

  #[serde(default)]
  pub volume: Option<f64>,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub converted_last: CurrencyMap,

  #[serde(default, deserialize_with = "crate::de::map_skip_nulls")]
  pub converted_volume: CurrencyMap,

  /// `"green"`, `"yellow"` or `"red"`
  #[serde(default)]
  pub trust_score: Option<String>,

  #[serde(default)]
  pub bid_ask_spread_percentage: Option<f64>,

  #[serde(default)]
  pub timestamp: Option<DateTime<Utc>>,

  #[serde(default)]
  pub last_traded_at: Option<DateTime<Utc>>,

  #[serde(default)]
  pub last_fetch_at: Option<DateTime<Utc>>,

  #[serde(default, deserialize_with = "crate::de::null_as_default")]
  pub is_anomaly: bool,

  #[serde(default, deserialize_with = "crate::de::null_as_default")]
  pub is_stale: bool,

  #[serde(default)]
  pub trade_url: Option<String>,

  #[serde(default)]
  pub coin_id: Option<String>,

  #[serde(default)]
  pub target_coin_id: Option<String>,
}

/// Venue of a [`Ticker`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerMarket {
  pub name: String,

  pub identifier: String,

  #[serde(default, deserialize_with = "crate::de::null_as_default")]
  pub has_trading_incentive: bool,
}
