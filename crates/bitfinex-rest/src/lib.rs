//! REST API client for the Bitfinex v1 exchange API
//!
//! Every operation goes through one [`Dispatcher`]: it checks the command
//! and symbol against the static tables, builds the URL, attaches a payload
//! (signed for private commands) and decodes the JSON reply with exact
//! decimals.
//!
//! # Features
//!
//! - **Market Data**: Ticker, daily summary, order book, trades, pair list
//! - **Lending**: Lending book and completed loans
//! - **Trading**: Place, cancel and query orders
//! - **Account**: Wallet balances
//!
//! # Authentication
//!
//! Private endpoints require API credentials. Requests are signed with
//! HMAC-SHA384 over the base64 payload, see [`bitfinex_auth`].
//!
//! # Failed Requests
//!
//! Operations return an empty object when the request fails on the remote
//! side (timeout, connection error, malformed body); the failure is logged
//! at `warn` level. [`Dispatcher::try_dispatch`] returns those failures as
//! errors instead.
//!
//! # Example
//!
//! ```no_run
//! use bitfinex_rest::{BitfinexClient, BookLimits, Credentials, Currency, Pair};
//! use bitfinex_rest::types::TickerInfo;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = BitfinexClient::new()?;
//!     let ticker: TickerInfo = client.ticker(Pair::BtcUsd).await?.decode()?;
//!     println!("BTC/USD: {}", ticker.last_price);
//!
//!     let book = client
//!         .lendbook(Currency::Usd, BookLimits::new().with_bids(10))
//!         .await?;
//!     println!("Lendbook: {:?}", book);
//!
//!     // Private endpoints (auth required)
//!     let creds = Credentials::from_env()?;
//!     let auth_client = BitfinexClient::with_credentials(creds)?;
//!     let balances = auth_client.balances().await?;
//!     println!("Balances: {:?}", balances);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod dispatch;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export main types
pub use client::{BitfinexClient, PairCheck};
pub use config::{ApiUrl, ClientConfig};
pub use dispatch::{Dispatcher, PreparedRequest};
pub use error::{RestError, RestResult};
pub use bitfinex_auth::{AuthError, Credentials};

// Re-export endpoint-specific types
pub use types::{BookLimits, LendsQuery, OrderRequest, TradesQuery, DEFAULT_LIMIT};

// Re-export shared types for convenience
pub use bitfinex_types::{
    ApiValue, Command, Currency, Decimal, Exchange, InputError, OrderSide, OrderType, Pair,
    Payload, Symbol, WalletType,
};
