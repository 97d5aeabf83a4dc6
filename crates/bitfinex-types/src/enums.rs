//! Order side, order type, exchange and wallet enums

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl OrderSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }

    /// Returns the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Order types
///
/// Plain variants trade on margin, `Exchange*` variants trade from the
/// exchange wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderType {
    #[serde(rename = "market")]
    Market,
    #[serde(rename = "limit")]
    Limit,
    #[serde(rename = "stop")]
    Stop,
    #[serde(rename = "trailing-stop")]
    TrailingStop,
    #[serde(rename = "fill-or-kill")]
    FillOrKill,
    #[serde(rename = "exchange market")]
    ExchangeMarket,
    #[serde(rename = "exchange limit")]
    ExchangeLimit,
    #[serde(rename = "exchange stop")]
    ExchangeStop,
    #[serde(rename = "exchange trailing-stop")]
    ExchangeTrailingStop,
    #[serde(rename = "exchange fill-or-kill")]
    ExchangeFillOrKill,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
            Self::Stop => "stop",
            Self::TrailingStop => "trailing-stop",
            Self::FillOrKill => "fill-or-kill",
            Self::ExchangeMarket => "exchange market",
            Self::ExchangeLimit => "exchange limit",
            Self::ExchangeStop => "exchange stop",
            Self::ExchangeTrailingStop => "exchange trailing-stop",
            Self::ExchangeFillOrKill => "exchange fill-or-kill",
        }
    }

    /// Returns true for exchange-wallet order types
    pub fn is_exchange(&self) -> bool {
        matches!(
            self,
            Self::ExchangeMarket
                | Self::ExchangeLimit
                | Self::ExchangeStop
                | Self::ExchangeTrailingStop
                | Self::ExchangeFillOrKill
        )
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Venue an order is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    Bitfinex,
    Bitstamp,
    #[default]
    All,
}

impl Exchange {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bitfinex => "bitfinex",
            Self::Bitstamp => "bitstamp",
            Self::All => "all",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wallet a balance belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WalletType {
    Exchange,
    Deposit,
    Trading,
}
