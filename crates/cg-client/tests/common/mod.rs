#![allow(dead_code)]

use cg_client::{CoinGeckoClient, Config};
use wiremock::MockServer;

/// Start a mock server and a client whose base URL points at its `/api/v3/`
pub async fn setup() -> (MockServer, CoinGeckoClient) {
  let _ = tracing_subscriber::fmt().with_test_writer().try_init();

  let server = MockServer::start().await;
  let config = Config::default().with_base_url(format!("{}/api/v3/", server.uri()));
  let client = CoinGeckoClient::new(config).expect("Failed to create client");
  (server, client)
}

pub const PING_BODY: &str = r#"{"gecko_says":"(V3) To the Moon!"}"#;

pub const MARKETS_BODY: &str = r#"[
  {
    "id": "tether", "symbol": "usdt", "name": "Tether",
    "current_price": 1.0, "market_cap": 110000000000, "market_cap_rank": 3,
    "roi": null, "max_supply": null,
    "price_change_percentage_1h_in_currency": 0.01,
    "price_change_percentage_24h_in_currency": -0.02
  },
  {
    "id": "bitcoin", "symbol": "btc", "name": "Bitcoin",
    "current_price": 67187.33, "market_cap": 1323454098765, "market_cap_rank": 1,
    "ath": 73738, "ath_date": "2024-03-14T07:10:36.635Z",
    "max_supply": 21000000,
    "price_change_percentage_1h_in_currency": 0.2
  },
  {
    "id": "ethereum", "symbol": "eth", "name": "Ethereum",
    "current_price": 3512.4, "market_cap_rank": 2,
    "roi": {"times": 58.3, "currency": "btc", "percentage": 5830.1}
  }
]"#;
