//! Query options for the `/coins` endpoints and their query-string encoding

use cg_models::{CoinsOrder, PriceChangeWindow};

/// Default page size for `/coins/markets`
pub const DEFAULT_PER_PAGE: u16 = 250;

/// Default page for `/coins/markets`
pub const DEFAULT_PAGE: u16 = 1;

/// Ordered query parameters, ready for encoding
pub type QueryParams = Vec<(&'static str, String)>;

/// Options shared by [`markets`](crate::CoinsEndpoints::markets) and
/// [`coin`](crate::CoinsEndpoints::coin).
///
/// Unset fields fall back to the API defaults; `per_page` and `page` treat
/// zero as unset. Each endpoint reads only the options it understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoinsQueryOptions {
  /// Restrict the listing to one category, e.g. `"decentralized-finance-defi"`
  pub category: Option<String>,
  /// Restrict the listing to these coin ids
  pub coin_ids: Vec<String>,
  /// Include localized names and descriptions in the detail record
  pub localization: Option<bool>,
  /// Include exchange tickers in the detail record
  pub tickers: Option<bool>,
  /// Include market data in the detail record
  pub market_data: Option<bool>,
  /// Include community statistics in the detail record
  pub community_data: Option<bool>,
  /// Include developer statistics in the detail record
  pub developer_data: Option<bool>,
  /// Include the seven-day sparkline
  pub sparkline: Option<bool>,
  /// Sort order of the listing
  pub order: Option<CoinsOrder>,
  /// Rows per page of the listing
  pub per_page: Option<u16>,
  /// Page of the listing, starting at 1
  pub page: Option<u16>,
  /// Lookback windows for in-currency price changes
  pub price_change_percentage: Vec<PriceChangeWindow>,
}

impl CoinsQueryOptions {
  /// Empty options
  pub fn new() -> Self {
    Self::default()
  }

  /// Filter by category
  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  /// Restrict to explicit coin ids
  pub fn with_coin_ids<I, S>(mut self, ids: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.coin_ids = ids.into_iter().map(Into::into).collect();
    self
  }

  /// Set the sort order
  pub fn with_order(mut self, order: CoinsOrder) -> Self {
    self.order = Some(order);
    self
  }

  /// Set page size and page number
  pub fn with_page(mut self, per_page: u16, page: u16) -> Self {
    self.per_page = Some(per_page);
    self.page = Some(page);
    self
  }

  /// Request the seven-day sparkline
  pub fn with_sparkline(mut self, sparkline: bool) -> Self {
    self.sparkline = Some(sparkline);
    self
  }

  /// Request in-currency price changes for these windows
  pub fn with_price_change_percentage(mut self, windows: &[PriceChangeWindow]) -> Self {
    self.price_change_percentage = windows.to_vec();
    self
  }

  /// Set the detail-record inclusion flags at once
  pub fn with_detail_sections(
    mut self,
    localization: bool,
    tickers: bool,
    market_data: bool,
    community_data: bool,
    developer_data: bool,
  ) -> Self {
    self.localization = Some(localization);
    self.tickers = Some(tickers);
    self.market_data = Some(market_data);
    self.community_data = Some(community_data);
    self.developer_data = Some(developer_data);
    self
  }

  /// Query parameters for `/coins/markets`, defaults applied
  pub fn market_params(&self, vs_currency: &str) -> QueryParams {
    let mut params: QueryParams = vec![("vs_currency", vs_currency.to_string())];

    if !self.coin_ids.is_empty() {
      params.push(("ids", self.coin_ids.join(",")));
    }

    if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
      params.push(("category", category.to_string()));
    }

    let per_page = self.per_page.filter(|n| *n > 0).unwrap_or(DEFAULT_PER_PAGE);
    let page = self.page.filter(|n| *n > 0).unwrap_or(DEFAULT_PAGE);

    let windows: &[PriceChangeWindow] = if self.price_change_percentage.is_empty() {
      &PriceChangeWindow::DEFAULT_SET
    } else {
      &self.price_change_percentage
    };

    params.push(("order", self.order.unwrap_or_default().to_string()));
    params.push(("per_page", per_page.to_string()));
    params.push(("page", page.to_string()));
    params.push(("sparkline", self.sparkline.unwrap_or(false).to_string()));
    params.push(("price_change_percentage", PriceChangeWindow::join(windows)));

    params
  }

  /// Query parameters for `/coins/{id}`; only flags that were set are sent
  pub fn coin_params(&self) -> QueryParams {
    [
      ("localization", self.localization),
      ("tickers", self.tickers),
      ("market_data", self.market_data),
      ("community_data", self.community_data),
      ("developer_data", self.developer_data),
      ("sparkline", self.sparkline),
    ]
    .into_iter()
    .filter_map(|(key, flag)| flag.map(|value| (key, value.to_string())))
    .collect()
  }
}

/// Encode parameters as an `application/x-www-form-urlencoded` query string
pub fn encode_query(params: &[(&str, String)]) -> String {
  url::form_urlencoded::Serializer::new(String::new())
    .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())))
    .finish()
}

/// Join a path and its parameters into a relative reference
pub(crate) fn with_query(path: &str, params: &[(&str, String)]) -> String {
  if params.is_empty() {
    path.to_string()
  } else {
    format!("{}?{}", path, encode_query(params))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn as_map(params: &[(&str, String)]) -> HashMap<String, String> {
    params.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
  }

  #[test]
  fn test_market_defaults() {
    let params = as_map(&CoinsQueryOptions::default().market_params("usd"));
    assert_eq!(params["vs_currency"], "usd");
    assert_eq!(params["order"], "market_cap_desc");
    assert_eq!(params["per_page"], "250");
    assert_eq!(params["page"], "1");
    assert_eq!(params["sparkline"], "false");
    assert_eq!(params["price_change_percentage"], "1h,24h,7d,14d,30d");
    assert!(!params.contains_key("ids"));
    assert!(!params.contains_key("category"));
  }

  #[test]
  fn test_market_zero_paging_falls_back() {
    let options = CoinsQueryOptions::new().with_page(0, 0);
    let params = as_map(&options.market_params("eur"));
    assert_eq!(params["per_page"], "250");
    assert_eq!(params["page"], "1");
  }

  #[test]
  fn test_market_overrides() {
    let options = CoinsQueryOptions::new()
      .with_coin_ids(["bitcoin", "ethereum"])
      .with_category("layer-1")
      .with_order(CoinsOrder::VolumeDesc)
      .with_page(50, 3)
      .with_sparkline(true)
      .with_price_change_percentage(&[PriceChangeWindow::OneYear, PriceChangeWindow::TwoHundredDays]);

    let params = as_map(&options.market_params("btc"));
    assert_eq!(params["ids"], "bitcoin,ethereum");
    assert_eq!(params["category"], "layer-1");
    assert_eq!(params["order"], "volume_desc");
    assert_eq!(params["per_page"], "50");
    assert_eq!(params["page"], "3");
    assert_eq!(params["sparkline"], "true");
    assert_eq!(params["price_change_percentage"], "1y,200d");
  }

  #[test]
  fn test_coin_params_only_set_flags() {
    assert!(CoinsQueryOptions::default().coin_params().is_empty());

    let options =
      CoinsQueryOptions::new().with_detail_sections(false, true, true, false, false);
    let params = as_map(&options.coin_params());
    assert_eq!(params.len(), 5);
    assert_eq!(params["localization"], "false");
    assert_eq!(params["tickers"], "true");
    assert_eq!(params["developer_data"], "false");
    assert!(!params.contains_key("sparkline"));
  }

  #[test]
  fn test_query_round_trip() {
    let options = CoinsQueryOptions::new()
      .with_coin_ids(["bitcoin", "wrapped bitcoin"])
      .with_category("real-world-assets & more")
      .with_order(CoinsOrder::IdAsc)
      .with_price_change_percentage(&PriceChangeWindow::ALL);
    let params = options.market_params("usd");

    let encoded = encode_query(&params);
    let reparsed: HashMap<String, String> =
      url::form_urlencoded::parse(encoded.as_bytes()).into_owned().collect();

    assert_eq!(reparsed, as_map(&params));
  }

  #[test]
  fn test_with_query() {
    assert_eq!(with_query("ping", &[]), "ping");
    assert_eq!(
      with_query("coins/bitcoin", &[("tickers", "false".to_string())]),
      "coins/bitcoin?tickers=false"
    );
  }
}
