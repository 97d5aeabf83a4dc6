//! Error types for authentication operations

/// Errors that can occur while preparing authenticated requests
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// An authenticated command was signed without a configured secret
    #[error("Cannot sign request: no API secret configured")]
    MissingSecret,

    /// Invalid API credentials
    #[error("Invalid credentials: {0}")]
    InvalidCredentials(String),

    /// Environment variable not set
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),
}

/// Result type for authentication operations
pub type AuthResult<T> = Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AuthError::EnvVarNotSet("BFX_API_KEY".to_string());
        assert!(err.to_string().contains("BFX_API_KEY"));
        assert!(AuthError::MissingSecret.to_string().contains("secret"));
    }
}
