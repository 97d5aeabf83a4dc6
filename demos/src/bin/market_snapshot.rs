//! Demo 1: Market Snapshot
//!
//! Showcases: public market data, exact decimals, typed decoding
//!
//! Run: RUST_LOG=debug cargo run --bin market_snapshot

use bitfinex_rest::types::{DaySummary, OrderbookData, TickerInfo, TradeEntry};
use bitfinex_rest::{BitfinexClient, BookLimits, ClientConfig, Pair, TradesQuery};
use colored::*;
use rust_decimal::Decimal;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  MARKET SNAPSHOT".cyan().bold());
    println!("{}", "  Bitfinex REST Demo - Tickers, Books and Trades".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let config = ClientConfig::new().with_timeout(Duration::from_secs(5));
    let client = BitfinexClient::connect(config).await?;
    println!("{} Connected to Bitfinex\n", "✓".green());

    println!(
        "  {:<8} {:>12} {:>12} {:>12} {:>10} {:>14}",
        "PAIR".white().bold(),
        "BID".white().bold(),
        "ASK".white().bold(),
        "LAST".white().bold(),
        "SPREAD".white().bold(),
        "24H VOLUME".white().bold()
    );
    println!("  {}", "─".repeat(72));

    for pair in Pair::ALL {
        let ticker = client.ticker(pair).await?;
        if ticker.is_empty_object() {
            println!("  {:<8} {}", pair.as_str().cyan(), "unavailable".red());
            continue;
        }

        let ticker: TickerInfo = ticker.decode()?;
        let volume = client
            .today(pair)
            .await?
            .decode::<DaySummary>()
            .map(|day| day.volume)
            .unwrap_or_default();
        let spread = ticker
            .spread_bps()
            .map(|bps| format!("{:.1}bp", bps))
            .unwrap_or_else(|| "-".to_string());

        println!(
            "  {:<8} {:>12} {:>12} {:>12} {:>10} {:>14.2}",
            pair.as_str().cyan(),
            ticker.bid,
            ticker.ask,
            ticker.last_price,
            spread.yellow(),
            volume
        );
    }

    let pair = Pair::BtcUsd;
    println!();
    println!("{}", format!("  {} ORDER BOOK (top 5)", pair.as_str().to_uppercase()).white().bold());
    println!("  {}", "─".repeat(72));

    let book = client
        .orderbook(pair, BookLimits::new().with_bids(5).with_asks(5))
        .await?;
    if let Ok(book) = book.decode::<OrderbookData>() {
        for level in book.asks.iter().rev() {
            println!("  {:>14} {:>16}", level.price.to_string().red(), level.amount);
        }
        println!(
            "  {:>14} {}",
            "spread",
            book.spread().unwrap_or(Decimal::ZERO).to_string().yellow()
        );
        for level in &book.bids {
            println!("  {:>14} {:>16}", level.price.to_string().green(), level.amount);
        }
    }

    println!();
    println!("{}", "  RECENT TRADES".white().bold());
    println!("  {}", "─".repeat(72));

    let trades = client.trades(pair, TradesQuery::new().with_limit(10)).await?;
    if let Ok(trades) = trades.decode::<Vec<TradeEntry>>() {
        for trade in trades {
            let side = match trade.side.as_deref() {
                Some("buy") => "BUY ".green(),
                Some("sell") => "SELL".red(),
                _ => "    ".normal(),
            };
            println!("  {} {:>12} {:>16} {}", side, trade.price, trade.amount, trade.exchange.dimmed());
        }
    }

    Ok(())
}
