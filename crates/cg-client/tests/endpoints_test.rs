mod common;

use cg_client::{CoinsOrder, CoinsQueryOptions, Error, PriceChangeWindow, RateType};
use common::{setup, MARKETS_BODY, PING_BODY};
use wiremock::matchers::{any, header, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_ping() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/ping"))
    .and(header("content-type", "application/json"))
    .respond_with(ResponseTemplate::new(200).set_body_string(PING_BODY))
    .expect(1)
    .mount(&server)
    .await;

  let ping = client.util().ping().await.expect("ping failed");
  assert_eq!(ping.status, "(V3) To the Moon!");
  assert_eq!(ping.status_code.as_u16(), 200);
}

#[tokio::test]
async fn test_ping_ignores_unknown_fields() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/ping"))
    .respond_with(
      ResponseTemplate::new(200)
        .set_body_string(r#"{"gecko_says":"(V3) To the Moon!","served_by":{"region":"eu","ids":[1,2]}}"#),
    )
    .mount(&server)
    .await;

  let ping = client.util().ping().await.expect("ping failed").into_inner();
  assert_eq!(ping.status, "(V3) To the Moon!");
}

#[tokio::test]
async fn test_exchange_rates() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/exchange_rates"))
    .respond_with(ResponseTemplate::new(200).set_body_string(
      r#"{"rates":{
        "btc":{"name":"Bitcoin","unit":"BTC","value":1.0,"type":"crypto"},
        "usd":{"name":"US Dollar","unit":"$","value":67187.33,"type":"fiat"},
        "xag":{"name":"Silver - Troy Ounce","unit":"XAG","value":2450.1,"type":"commodity"}
      }}"#,
    ))
    .expect(1)
    .mount(&server)
    .await;

  let rates = client.exchange_rates().exchange_rates().await.expect("exchange rates failed");
  assert_eq!(rates.rates.len(), 3);
  assert_eq!(rates.get("usd").unwrap().unit, "$");
  assert_eq!(rates.get("xag").unwrap().rate_type, RateType::Commodity);
}

#[tokio::test]
async fn test_markets_default_query() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/coins/markets"))
    .and(query_param("vs_currency", "usd"))
    .and(query_param("order", "market_cap_desc"))
    .and(query_param("per_page", "250"))
    .and(query_param("page", "1"))
    .and(query_param("sparkline", "false"))
    .and(query_param("price_change_percentage", "1h,24h,7d,14d,30d"))
    .and(query_param_is_missing("ids"))
    .and(query_param_is_missing("category"))
    .respond_with(ResponseTemplate::new(200).set_body_string(MARKETS_BODY))
    .expect(1)
    .mount(&server)
    .await;

  let markets = client.coins().markets("usd", None).await.expect("markets failed");

  // server order, not rank order
  let ids: Vec<&str> = markets.iter().map(|row| row.id.as_str()).collect();
  assert_eq!(ids, vec!["tether", "bitcoin", "ethereum"]);
}

#[tokio::test]
async fn test_markets_with_options() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/coins/markets"))
    .and(query_param("vs_currency", "eur"))
    .and(query_param("ids", "bitcoin,ethereum"))
    .and(query_param("category", "layer-1"))
    .and(query_param("order", "volume_asc"))
    .and(query_param("per_page", "2"))
    .and(query_param("page", "4"))
    .and(query_param("sparkline", "true"))
    .and(query_param("price_change_percentage", "200d,1y"))
    .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
    .expect(1)
    .mount(&server)
    .await;

  let options = CoinsQueryOptions::new()
    .with_coin_ids(["bitcoin", "ethereum"])
    .with_category("layer-1")
    .with_order(CoinsOrder::VolumeAsc)
    .with_page(2, 4)
    .with_sparkline(true)
    .with_price_change_percentage(&[PriceChangeWindow::TwoHundredDays, PriceChangeWindow::OneYear]);

  let markets = client.coins().markets("eur", Some(&options)).await.expect("markets failed");
  assert!(markets.is_empty());
}

#[tokio::test]
async fn test_markets_absent_optionals() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/coins/markets"))
    .respond_with(ResponseTemplate::new(200).set_body_string(MARKETS_BODY))
    .mount(&server)
    .await;

  let markets = client.coins().markets("usd", None).await.expect("markets failed").into_inner();

  let tether = &markets[0];
  assert!(tether.roi.is_none());
  assert!(tether.max_supply.is_none());
  assert_eq!(tether.price_change_percentage(PriceChangeWindow::OneDay), Some(-0.02));
  assert_eq!(tether.price_change_percentage(PriceChangeWindow::SevenDays), None);

  let bitcoin = &markets[1];
  assert!(bitcoin.roi.is_none());
  assert_eq!(bitcoin.max_supply, Some(21_000_000.0));
  assert!(bitcoin.ath_date.is_some());
  assert_eq!(bitcoin.price_change_percentage(PriceChangeWindow::OneDay), None);

  let ethereum = &markets[2];
  assert_eq!(ethereum.roi.as_ref().map(|roi| roi.times), Some(58.3));
  assert!(ethereum.market_cap.is_none());
}

#[tokio::test]
async fn test_coin_detail() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/coins/bitcoin"))
    .and(query_param("localization", "false"))
    .and(query_param("tickers", "false"))
    .and(query_param("market_data", "true"))
    .and(query_param("community_data", "false"))
    .and(query_param("developer_data", "false"))
    .and(query_param_is_missing("sparkline"))
    .respond_with(ResponseTemplate::new(200).set_body_string(
      r#"{
        "id": "bitcoin", "symbol": "btc", "name": "Bitcoin",
        "categories": ["Cryptocurrency"],
        "image": {"thumb": "t.png", "small": "s.png", "large": "l.png"},
        "market_data": {"current_price": {"usd": 67187.33}, "market_cap_rank": 1},
        "last_updated": "2024-05-01T12:00:00.000Z"
      }"#,
    ))
    .expect(1)
    .mount(&server)
    .await;

  let options = CoinsQueryOptions::new().with_detail_sections(false, false, true, false, false);
  let coin = client.coins().coin("bitcoin", Some(&options)).await.expect("coin failed");

  assert_eq!(coin.name, "Bitcoin");
  assert_eq!(coin.market_data.as_ref().and_then(|m| m.price_in("usd")), Some(67187.33));
  assert!(coin.tickers.is_none());
  assert!(coin.developer_data.is_none());
  assert_eq!(coin.image.as_ref().and_then(|i| i.large.as_deref()), Some("l.png"));
}

#[tokio::test]
async fn test_coin_without_options_sends_no_query() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/coins/ethereum"))
    .and(query_param_is_missing("tickers"))
    .and(query_param_is_missing("localization"))
    .respond_with(
      ResponseTemplate::new(200).set_body_string(r#"{"id":"ethereum","symbol":"eth","name":"Ethereum"}"#),
    )
    .expect(1)
    .mount(&server)
    .await;

  let coin = client.coins().coin("ethereum", None).await.expect("coin failed");
  assert_eq!(coin.symbol, "eth");
}

#[tokio::test]
async fn test_validation_makes_no_requests() {
  let (server, client) = setup().await;

  Mock::given(any()).respond_with(ResponseTemplate::new(200)).expect(0).mount(&server).await;

  let err = client.coins().markets("", None).await.unwrap_err();
  assert!(matches!(err, Error::Validation(_)));

  let err = client.coins().coin("", None).await.unwrap_err();
  assert!(matches!(err, Error::Validation(_)));

  let err = client.coins().coin("   ", Some(&CoinsQueryOptions::default())).await.unwrap_err();
  assert!(matches!(err, Error::Validation(_)));

  assert!(server.received_requests().await.unwrap_or_default().is_empty());
}

#[tokio::test]
async fn test_not_found_returns_api_error_with_response() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/coins/no-such-coin"))
    .respond_with(
      ResponseTemplate::new(404)
        .insert_header("x-request-id", "abc123")
        .set_body_string(r#"{"error":"coin not found"}"#),
    )
    .expect(1)
    .mount(&server)
    .await;

  let err = client.coins().coin("no-such-coin", None).await.unwrap_err();

  match &err {
    Error::Api { status, response } => {
      assert_eq!(*status, 404);
      assert_eq!(response.status.as_u16(), 404);
      assert_eq!(response.body, r#"{"error":"coin not found"}"#);
      assert_eq!(response.headers.get("x-request-id").unwrap(), "abc123");
      assert_eq!(response.url.path(), "/api/v3/coins/no-such-coin");
    }
    other => panic!("Expected Api error, got {:?}", other),
  }
  assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_every_endpoint_reports_api_errors() {
  let (server, client) = setup().await;

  Mock::given(any()).respond_with(ResponseTemplate::new(404)).mount(&server).await;

  assert_eq!(client.util().ping().await.unwrap_err().status(), Some(404));
  assert_eq!(client.exchange_rates().exchange_rates().await.unwrap_err().status(), Some(404));
  assert_eq!(client.coins().markets("usd", None).await.unwrap_err().status(), Some(404));
  assert_eq!(client.coins().coin("bitcoin", None).await.unwrap_err().status(), Some(404));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/ping"))
    .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
    .expect(1)
    .mount(&server)
    .await;

  let err = client.util().ping().await.unwrap_err();
  assert_eq!(err.status(), Some(503));
  assert_eq!(err.raw_response().unwrap().body, "maintenance");
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/coins/markets"))
    .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"not":"a list"}"#))
    .mount(&server)
    .await;

  let err = client.coins().markets("usd", None).await.unwrap_err();
  assert!(matches!(err, Error::Decode(_)));
}

#[tokio::test]
async fn test_concurrent_calls_share_client() {
  let (server, client) = setup().await;

  Mock::given(method("GET"))
    .and(path("/api/v3/ping"))
    .respond_with(ResponseTemplate::new(200).set_body_string(PING_BODY))
    .expect(3)
    .mount(&server)
    .await;

  let util = client.util();
  let other = client.util();
  let (a, b, c) = tokio::join!(util.ping(), util.ping(), other.ping());
  for result in [a, b, c] {
    assert_eq!(result.expect("ping failed").status, "(V3) To the Moon!");
  }
}
