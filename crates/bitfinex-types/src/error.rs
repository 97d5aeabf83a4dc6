//! Input validation errors

use thiserror::Error;

use crate::command::Command;

/// Rejection of a malformed request, raised before any network access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// Command string is not one of the supported commands
    #[error("Bitfinex API command not supported: {0}")]
    UnknownCommand(String),

    /// Symbol string is neither a known currency nor a known pair
    #[error("Unknown Bitfinex symbol: {0}")]
    UnknownSymbol(String),

    /// Symbol does not fit the command's scope
    #[error("Invalid command and symbol combination for Bitfinex command: {command} with symbol {symbol}")]
    InvalidScope {
        /// Offending command
        command: Command,
        /// Offending symbol, `<none>` when it was missing
        symbol: String,
    },

    /// A decimal field held a string that is not a number
    #[error("Field {field} does not hold a decimal number: {value:?}")]
    DecimalParse { field: String, value: String },
}

impl InputError {
    /// Build a scope error for a command and an optional raw symbol
    pub fn invalid_scope(command: Command, symbol: Option<&str>) -> Self {
        Self::InvalidScope {
            command,
            symbol: symbol.unwrap_or("<none>").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_error_names_command_and_symbol() {
        let err = InputError::invalid_scope(Command::Ticker, Some("usd"));
        let msg = err.to_string();
        assert!(msg.contains("ticker"));
        assert!(msg.contains("usd"));
    }

    #[test]
    fn test_scope_error_without_symbol() {
        let err = InputError::invalid_scope(Command::Lendbook, None);
        assert!(err.to_string().contains("<none>"));
    }
}
