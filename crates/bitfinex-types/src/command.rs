//! Supported API commands and their scope tables

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;
use crate::symbol::Symbol;

/// Which kind of symbol a command takes in its URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scope {
    /// Requires a trading pair (e.g. `btcusd`)
    Pair,
    /// Requires a single currency (e.g. `usd`)
    Currency,
    /// Takes no symbol
    Unscoped,
}

/// Bitfinex v1 command supported by this client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Ticker for a pair
    #[serde(rename = "ticker")]
    Ticker,
    /// Today's low/high/volume for a pair
    #[serde(rename = "today")]
    Today,
    /// Order book for a pair
    #[serde(rename = "book")]
    Book,
    /// Recent trades for a pair
    #[serde(rename = "trades")]
    Trades,
    /// Place a new order
    #[serde(rename = "order/new")]
    OrderNew,
    /// Lending book for a currency
    #[serde(rename = "lendbook")]
    Lendbook,
    /// Recent lends for a currency
    #[serde(rename = "lends")]
    Lends,
    /// List of tradable pairs
    #[serde(rename = "symbols")]
    Symbols,
    /// Cancel an order
    #[serde(rename = "order/cancel")]
    OrderCancel,
    /// Status of an order
    #[serde(rename = "order/status")]
    OrderStatus,
    /// Active orders
    #[serde(rename = "orders")]
    Orders,
    /// Wallet balances
    #[serde(rename = "balances")]
    Balances,
}

impl Command {
    /// Every supported command
    pub const ALL: [Command; 12] = [
        Self::Ticker,
        Self::Today,
        Self::Book,
        Self::Trades,
        Self::OrderNew,
        Self::Lendbook,
        Self::Lends,
        Self::Symbols,
        Self::OrderCancel,
        Self::OrderStatus,
        Self::Orders,
        Self::Balances,
    ];

    /// Returns the command path as used in API URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ticker => "ticker",
            Self::Today => "today",
            Self::Book => "book",
            Self::Trades => "trades",
            Self::OrderNew => "order/new",
            Self::Lendbook => "lendbook",
            Self::Lends => "lends",
            Self::Symbols => "symbols",
            Self::OrderCancel => "order/cancel",
            Self::OrderStatus => "order/status",
            Self::Orders => "orders",
            Self::Balances => "balances",
        }
    }

    /// Returns the symbol scope of this command
    pub fn scope(&self) -> Scope {
        match self {
            Self::Ticker | Self::Today | Self::Book | Self::Trades | Self::OrderNew => Scope::Pair,
            Self::Lendbook | Self::Lends => Scope::Currency,
            Self::Symbols | Self::OrderCancel | Self::OrderStatus | Self::Orders | Self::Balances => {
                Scope::Unscoped
            }
        }
    }

    /// Returns true if requests for this command must be signed
    pub fn is_authenticated(&self) -> bool {
        matches!(
            self,
            Self::OrderNew | Self::OrderCancel | Self::OrderStatus | Self::Orders | Self::Balances
        )
    }

    /// Check that `symbol` fits this command's scope
    pub fn check_symbol(&self, symbol: Option<&Symbol>) -> Result<(), InputError> {
        let fits = match (self.scope(), symbol) {
            (Scope::Unscoped, None) => true,
            (Scope::Currency, Some(Symbol::Currency(_))) => true,
            (Scope::Pair, Some(Symbol::Pair(_))) => true,
            _ => false,
        };

        if fits {
            Ok(())
        } else {
            Err(InputError::invalid_scope(*self, symbol.map(Symbol::as_str)))
        }
    }
}

impl FromStr for Command {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|command| command.as_str() == s)
            .ok_or_else(|| InputError::UnknownCommand(s.to_string()))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
