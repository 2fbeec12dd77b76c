//! Market Snapshot Example
//!
//! This example demonstrates how to use cg-client to:
//! - Check that the API is reachable
//! - List the top coins by market cap with short-term price changes
//! - Convert BTC into a handful of currencies
//! - Fetch the detail record for one coin
//! - Handle API errors and cancellation

use cg_client::{
  CancellationToken, CoinGeckoClient, CoinsQueryOptions, Config, Error, PriceChangeWindow,
  RateType,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  // Initialize logging
  tracing_subscriber::fmt::init();

  let config = Config::from_env().map_err(|e| {
    eprintln!("Failed to load configuration from the environment.");
    eprintln!("Error: {}", e);
    e
  })?;

  let client = CoinGeckoClient::new(config)?;

  let ping = client.util().ping().await?;
  println!("API status: {}\n", ping.status);

  // Top ten by market cap
  let options = CoinsQueryOptions::new().with_page(10, 1).with_price_change_percentage(&[
    PriceChangeWindow::OneHour,
    PriceChangeWindow::OneDay,
    PriceChangeWindow::SevenDays,
  ]);
  let markets = client.coins().markets("usd", Some(&options)).await?;

  println!("{:<4} {:<16} {:>14} {:>8} {:>8} {:>8}", "#", "Coin", "Price (USD)", "1h", "24h", "7d");
  for coin in markets.iter() {
    println!(
      "{:<4} {:<16} {:>14} {:>8} {:>8} {:>8}",
      coin.market_cap_rank.map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
      coin.name,
      coin.current_price.map(|p| format!("{:.2}", p)).unwrap_or_else(|| "n/a".to_string()),
      percent(coin.price_change_percentage(PriceChangeWindow::OneHour)),
      percent(coin.price_change_percentage(PriceChangeWindow::OneDay)),
      percent(coin.price_change_percentage(PriceChangeWindow::SevenDays)),
    );
  }

  // BTC conversions
  let rates = client.exchange_rates().exchange_rates().await?;
  println!("\n1 BTC is worth:");
  for code in ["usd", "eur", "jpy", "eth", "xau"] {
    if let Some(rate) = rates.get(code) {
      println!("  {:>16.4} {} ({})", rate.value, rate.unit, rate.name);
    }
  }
  println!("  {} fiat currencies listed", rates.of_type(RateType::Fiat).count());

  // Detail for one coin, with a deadline the caller controls
  let cancel = CancellationToken::new();
  let deadline = cancel.clone();
  tokio::spawn(async move {
    tokio::time::sleep(Duration::from_secs(10)).await;
    deadline.cancel();
  });

  let detail_options =
    CoinsQueryOptions::new().with_detail_sections(false, false, true, true, true);
  match client.coins().coin_with_token(&cancel, "bitcoin", Some(&detail_options)).await {
    Ok(coin) => {
      println!("\n{} ({})", coin.name, coin.symbol.to_uppercase());
      if let Some(homepage) = coin.homepage() {
        println!("  Homepage: {}", homepage);
      }
      if let Some(dev) = &coin.developer_data {
        println!("  Stars: {:?}, commits (4w): {:?}", dev.stars, dev.commit_count_4_weeks);
      }
    }
    Err(Error::Api { status, response }) => {
      eprintln!("Coin lookup failed with HTTP {}: {}", status, response.body);
    }
    Err(Error::Cancelled) => eprintln!("Coin lookup took too long and was cancelled"),
    Err(e) => return Err(e.into()),
  }

  Ok(())
}

fn percent(value: Option<f64>) -> String {
  value.map(|v| format!("{:+.2}%", v)).unwrap_or_else(|| "-".to_string())
}
