//! Demo 3: Account Overview
//!
//! Showcases: authenticated commands, signed payloads, wallet balances
//!
//! Run: BFX_API_KEY=... BFX_API_SECRET=... cargo run --bin account_overview

use bitfinex_rest::types::{BalanceEntry, OrderInfo};
use bitfinex_rest::{BitfinexClient, ClientConfig, Credentials};
use colored::*;
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    println!("{}", "═".repeat(70).cyan());
    println!("{}", "  ACCOUNT OVERVIEW".cyan().bold());
    println!("{}", "  Bitfinex REST Demo - Balances and Open Orders".cyan());
    println!("{}", "═".repeat(70).cyan());
    println!();

    let credentials = match Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            eprintln!("  Set BFX_API_KEY and BFX_API_SECRET to run this demo.");
            return Ok(());
        }
    };

    let config = ClientConfig::new()
        .with_credentials(credentials)
        .with_verify_pairs(false);
    let client = BitfinexClient::with_config(config)?;

    println!(
        "  {:<10} {:<8} {:>16} {:>16}",
        "WALLET".white().bold(),
        "CURRENCY".white().bold(),
        "AMOUNT".white().bold(),
        "AVAILABLE".white().bold()
    );
    println!("  {}", "─".repeat(54));

    let balances: Vec<BalanceEntry> = client.balances().await?.decode().unwrap_or_default();
    for balance in balances.iter().filter(|b| b.amount != Decimal::ZERO) {
        println!(
            "  {:<10} {:<8} {:>16} {:>16}",
            format!("{:?}", balance.wallet).to_lowercase().cyan(),
            balance.currency.to_uppercase(),
            balance.amount,
            balance.available.to_string().green()
        );
    }
    if balances.is_empty() {
        println!("  {}", "no balances".dimmed());
    }

    println!();
    println!("{}", "  OPEN ORDERS".white().bold());
    println!("  {}", "─".repeat(54));

    let orders: Vec<OrderInfo> = client.open_orders().await?.decode().unwrap_or_default();
    for order in &orders {
        println!(
            "  #{:<12} {:<8} {:<5} {:>12} @ {:<12} {}",
            order.id,
            order.symbol,
            order.side.to_string().yellow(),
            order.remaining_amount,
            order.price,
            order.order_type
        );
    }
    if orders.is_empty() {
        println!("  {}", "no open orders".dimmed());
    }

    Ok(())
}
