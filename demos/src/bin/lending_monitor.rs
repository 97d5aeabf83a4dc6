//! Demo 2: Lending Monitor
//!
//! Showcases: currency-scoped commands, lending book limits, rate maths
//!
//! Run: cargo run --bin lending_monitor

use bitfinex_rest::types::{LendEntry, LendbookData};
use bitfinex_rest::{BitfinexClient, BookLimits, Currency, LendsQuery};
use colored::*;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  LENDING MONITOR".cyan().bold());
    println!("{}", "  Bitfinex REST Demo - Margin Funding Rates".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let client = BitfinexClient::new()?;
    let limits = BookLimits::new().with_bids(5).with_asks(5);

    for currency in Currency::ALL {
        println!("{}", format!("  {}", currency.as_str().to_uppercase()).white().bold());
        println!("  {}", "─".repeat(54));

        let book = client.lendbook(currency, limits).await?;
        let book: LendbookData = match book.decode() {
            Ok(book) => book,
            Err(_) => {
                println!("  {}\n", "lending book unavailable".red());
                continue;
            }
        };

        println!(
            "  {:<8} {:>12} {:>10} {:>14} {:>6}",
            "SIDE".white().bold(),
            "RATE/YR".white().bold(),
            "RATE/DAY".white().bold(),
            "AMOUNT".white().bold(),
            "DAYS".white().bold()
        );
        for offer in &book.asks {
            println!(
                "  {:<8} {:>11.4}% {:>9.5}% {:>14.2} {:>6}",
                "offer".red(),
                offer.rate,
                offer.daily_rate(),
                offer.amount,
                offer.period
            );
        }
        for demand in &book.bids {
            println!(
                "  {:<8} {:>11.4}% {:>9.5}% {:>14.2} {:>6}",
                "demand".green(),
                demand.rate,
                demand.daily_rate(),
                demand.amount,
                demand.period
            );
        }

        let lends = client.lends(currency, LendsQuery::new().with_limit(1)).await?;
        if let Some(latest) = lends
            .decode::<Vec<LendEntry>>()
            .ok()
            .and_then(|lends| lends.into_iter().next())
        {
            let color = if latest.rate > dec!(10) {
                format!("{:.4}%", latest.rate).green()
            } else {
                format!("{:.4}%", latest.rate).white()
            };
            println!("  {} {} on {:.2} lent", "Latest rate:".dimmed(), color, latest.amount_lent);
        }
        println!();
    }

    Ok(())
}
