//! Currencies and trading pairs known to this client

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Single asset denomination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    /// Bitcoin
    Btc,
    /// Litecoin
    Ltc,
    /// US dollar
    #[default]
    Usd,
}

impl Currency {
    /// Every known currency
    pub const ALL: [Currency; 3] = [Self::Btc, Self::Ltc, Self::Usd];

    /// Returns the currency code as used in API URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Btc => "btc",
            Self::Ltc => "ltc",
            Self::Usd => "usd",
        }
    }
}

impl FromStr for Currency {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|currency| currency.as_str() == s)
            .ok_or_else(|| InputError::UnknownSymbol(s.to_string()))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tradable asset pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pair {
    /// BTC/USD, the primary pair
    #[default]
    BtcUsd,
    /// LTC/USD
    LtcUsd,
    /// LTC/BTC
    LtcBtc,
}

impl Pair {
    /// Every known pair
    pub const ALL: [Pair; 3] = [Self::BtcUsd, Self::LtcUsd, Self::LtcBtc];

    /// Returns the pair code as used in API URLs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BtcUsd => "btcusd",
            Self::LtcUsd => "ltcusd",
            Self::LtcBtc => "ltcbtc",
        }
    }

    /// Get the base currency (e.g., `btc` from `btcusd`)
    pub fn base(&self) -> Currency {
        match self {
            Self::BtcUsd => Currency::Btc,
            Self::LtcUsd | Self::LtcBtc => Currency::Ltc,
        }
    }

    /// Get the quote currency (e.g., `usd` from `btcusd`)
    pub fn quote(&self) -> Currency {
        match self {
            Self::BtcUsd | Self::LtcUsd => Currency::Usd,
            Self::LtcBtc => Currency::Btc,
        }
    }
}

impl FromStr for Pair {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|pair| pair.as_str() == s)
            .ok_or_else(|| InputError::UnknownSymbol(s.to_string()))
    }
}

impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbol segment of a command URL: a currency or a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Symbol {
    Currency(Currency),
    Pair(Pair),
}

impl Symbol {
    /// Get the symbol as a string slice
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Currency(currency) => currency.as_str(),
            Self::Pair(pair) => pair.as_str(),
        }
    }
}

impl FromStr for Symbol {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Currency>()
            .map(Self::Currency)
            .or_else(|_| s.parse::<Pair>().map(Self::Pair))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Currency> for Symbol {
    fn from(currency: Currency) -> Self {
        Self::Currency(currency)
    }
}

impl From<Pair> for Symbol {
    fn from(pair: Pair) -> Self {
        Self::Pair(pair)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_parse() {
        assert_eq!("usd".parse::<Symbol>().unwrap(), Symbol::Currency(Currency::Usd));
        assert_eq!("ltcbtc".parse::<Symbol>().unwrap(), Symbol::Pair(Pair::LtcBtc));
        assert!(matches!(
            "ethusd".parse::<Symbol>(),
            Err(InputError::UnknownSymbol(s)) if s == "ethusd"
        ));
    }

    #[test]
    fn test_pair_legs() {
        assert_eq!(Pair::LtcBtc.base(), Currency::Ltc);
        assert_eq!(Pair::LtcBtc.quote(), Currency::Btc);
        assert_eq!(Pair::BtcUsd.quote(), Currency::Usd);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Pair::default(), Pair::BtcUsd);
        assert_eq!(Currency::default(), Currency::Usd);
    }

    #[test]
    fn test_symbol_serde() {
        let json = serde_json::to_string(&Symbol::Pair(Pair::LtcUsd)).unwrap();
        assert_eq!(json, "\"ltcusd\"");

        let parsed: Symbol = serde_json::from_str("\"btc\"").unwrap();
        assert_eq!(parsed, Symbol::Currency(Currency::Btc));
    }
}
