//! Types for Bitfinex REST API requests and responses

use bitfinex_types::{Exchange, OrderSide, OrderType, Pair, Payload, WalletType};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Server-side default for every list limit
pub const DEFAULT_LIMIT: u32 = 50;

// ============================================================================
// Request Types
// ============================================================================

/// Bid/ask limits for the order book and the lending book
///
/// Limits equal to [`DEFAULT_LIMIT`] are left out of the payload. Either
/// side may be 0, which returns an empty list for that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookLimits {
    pub bids: u32,
    pub asks: u32,
}

impl Default for BookLimits {
    fn default() -> Self {
        Self {
            bids: DEFAULT_LIMIT,
            asks: DEFAULT_LIMIT,
        }
    }
}

impl BookLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bids(mut self, bids: u32) -> Self {
        self.bids = bids;
        self
    }

    pub fn with_asks(mut self, asks: u32) -> Self {
        self.asks = asks;
        self
    }

    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::new();
        if self.bids != DEFAULT_LIMIT {
            payload.insert("limit_bids", self.bids);
        }
        if self.asks != DEFAULT_LIMIT {
            payload.insert("limit_asks", self.asks);
        }
        payload
    }
}

/// Trade history query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradesQuery {
    /// Maximum number of trades, at least 1
    pub limit: u32,
    /// Only trades at or after this timestamp
    pub since: Option<Decimal>,
}

impl Default for TradesQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            since: None,
        }
    }
}

impl TradesQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn since(mut self, timestamp: Decimal) -> Self {
        self.since = Some(timestamp);
        self
    }

    pub fn to_payload(&self) -> Payload {
        history_payload("limit_trades", self.limit, self.since)
    }
}

/// Lending history query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LendsQuery {
    /// Maximum number of lends, at least 1
    pub limit: u32,
    /// Only lends at or after this timestamp
    pub since: Option<Decimal>,
}

impl Default for LendsQuery {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            since: None,
        }
    }
}

impl LendsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn since(mut self, timestamp: Decimal) -> Self {
        self.since = Some(timestamp);
        self
    }

    pub fn to_payload(&self) -> Payload {
        history_payload("limit_lends", self.limit, self.since)
    }
}

fn history_payload(limit_key: &str, limit: u32, since: Option<Decimal>) -> Payload {
    let mut payload = Payload::new();
    if limit != DEFAULT_LIMIT {
        payload.insert(limit_key, limit);
    }
    if let Some(since) = since {
        payload.insert("timestamp", since);
    }
    payload
}

/// New order parameters
///
/// Defaults: pair `btcusd`, exchange `all`, not hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub pair: Pair,
    pub amount: Decimal,
    pub price: Decimal,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub exchange: Exchange,
    pub hidden: bool,
}

impl OrderRequest {
    pub fn new(amount: Decimal, price: Decimal, side: OrderSide, order_type: OrderType) -> Self {
        Self {
            pair: Pair::default(),
            amount,
            price,
            side,
            order_type,
            exchange: Exchange::default(),
            hidden: false,
        }
    }

    /// Exchange-wallet limit order
    pub fn limit(pair: Pair, side: OrderSide, amount: Decimal, price: Decimal) -> Self {
        Self::new(amount, price, side, OrderType::ExchangeLimit).with_pair(pair)
    }

    pub fn with_pair(mut self, pair: Pair) -> Self {
        self.pair = pair;
        self
    }

    pub fn with_exchange(mut self, exchange: Exchange) -> Self {
        self.exchange = exchange;
        self
    }

    /// Hide the order from the public book
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Add the order fields to an authenticated payload
    pub fn extend_payload(&self, payload: &mut Payload) {
        payload.insert("symbol", self.pair.as_str());
        payload.insert("amount", self.amount);
        payload.insert("price", self.price);
        payload.insert("side", self.side.as_str());
        payload.insert("type", self.order_type.as_str());
        payload.insert("is_hidden", self.hidden);
        payload.insert("exchange", self.exchange.as_str());
    }
}

// ============================================================================
// Market Data Types
// ============================================================================

/// Ticker for a pair
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TickerInfo {
    /// (bid + ask) / 2
    pub mid: Decimal,
    /// Best bid
    pub bid: Decimal,
    /// Best ask
    pub ask: Decimal,
    /// Last traded price
    pub last_price: Decimal,
    /// Unix timestamp
    pub timestamp: Decimal,
}

impl TickerInfo {
    /// Get spread in basis points
    pub fn spread_bps(&self) -> Option<Decimal> {
        if self.mid.is_zero() {
            return None;
        }
        Some((self.ask - self.bid) / self.mid * Decimal::from(10000))
    }
}

/// Today's range and volume for a pair
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DaySummary {
    pub low: Decimal,
    pub high: Decimal,
    pub volume: Decimal,
}

/// Order book level
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BookLevel {
    pub price: Decimal,
    pub amount: Decimal,
    pub timestamp: Decimal,
}

/// Order book snapshot
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderbookData {
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

impl OrderbookData {
    /// Get the best bid price
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|level| level.price)
    }

    /// Get the best ask price
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|level| level.price)
    }

    /// Get the spread
    pub fn spread(&self) -> Option<Decimal> {
        Some(self.best_ask()? - self.best_bid()?)
    }
}

/// Executed trade
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TradeEntry {
    pub timestamp: Decimal,
    #[serde(default)]
    pub tid: Option<u64>,
    pub price: Decimal,
    pub amount: Decimal,
    /// Venue the trade happened on
    pub exchange: String,
    /// Taker side (`buy` or `sell`)
    #[serde(rename = "type", default)]
    pub side: Option<String>,
}

// ============================================================================
// Lending Types
// ============================================================================

/// Lending book offer or demand
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LendLevel {
    /// Rate in percent per 365 days
    pub rate: Decimal,
    pub amount: Decimal,
    /// Loan length in days
    pub period: u32,
    pub timestamp: Decimal,
    /// `Yes` when the offer is at the flash return rate
    #[serde(default)]
    pub frr: Option<String>,
}

impl LendLevel {
    /// Rate in percent per day
    pub fn daily_rate(&self) -> Decimal {
        self.rate / Decimal::from(365)
    }
}

/// Lending book snapshot
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LendbookData {
    /// Loan demands
    pub bids: Vec<LendLevel>,
    /// Loan offers
    pub asks: Vec<LendLevel>,
}

/// Completed loan
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LendEntry {
    /// Rate in percent per 365 days
    pub rate: Decimal,
    pub amount_lent: Decimal,
    pub timestamp: Decimal,
}

// ============================================================================
// Trading & Account Types
// ============================================================================

/// Order as reported by `order/new`, `order/status` and `orders`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrderInfo {
    pub id: u64,
    pub symbol: String,
    #[serde(default)]
    pub exchange: Option<String>,
    pub price: Decimal,
    #[serde(default)]
    pub avg_execution_price: Option<Decimal>,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub timestamp: Decimal,
    pub is_live: bool,
    pub is_cancelled: bool,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub was_forced: bool,
    pub original_amount: Decimal,
    pub remaining_amount: Decimal,
    pub executed_amount: Decimal,
}

impl OrderInfo {
    /// Returns true once the whole amount has executed
    pub fn is_filled(&self) -> bool {
        self.remaining_amount.is_zero()
    }
}

/// Balance of one currency in one wallet
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BalanceEntry {
    #[serde(rename = "type")]
    pub wallet: WalletType,
    pub currency: String,
    pub amount: Decimal,
    pub available: Decimal,
}
