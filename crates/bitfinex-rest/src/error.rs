//! Error types for REST API operations

use bitfinex_auth::AuthError;
use bitfinex_types::InputError;

/// Errors that can occur during REST API operations
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Bad command, symbol or scope combination
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),

    /// Signing failed, e.g. no secret configured
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Response body was not valid JSON or held a malformed decimal
    #[error("Decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

impl RestError {
    /// Returns true for failures on the remote side of the request
    ///
    /// These are the failures `dispatch` logs and turns into an empty
    /// result. Everything else is a local mistake and always surfaces.
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Timeout | Self::Decode(_))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
