//! API credentials for authenticated requests
//!
//! # Security
//!
//! The secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Keeps it out of `Debug` output
//! - Requires explicit access via `expose_secret()`

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha384;

use crate::error::{AuthError, AuthResult};

type HmacSha384 = Hmac<Sha384>;

/// API key and secret, immutable for the lifetime of a client
pub struct Credentials {
    /// API key (public)
    api_key: String,
    /// API secret (zeroized on drop)
    secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and its secret
    ///
    /// Both values must be non-empty.
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> AuthResult<Self> {
        let api_key = api_key.into();
        let secret = secret.into();

        if api_key.is_empty() {
            return Err(AuthError::InvalidCredentials("empty API key".to_string()));
        }
        if secret.is_empty() {
            return Err(AuthError::InvalidCredentials("empty API secret".to_string()));
        }

        Ok(Self {
            api_key,
            secret: SecretString::from(secret),
        })
    }

    /// Create credentials from environment variables
    ///
    /// Reads `BFX_API_KEY` and `BFX_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var("BFX_API_KEY")
            .map_err(|_| AuthError::EnvVarNotSet("BFX_API_KEY".to_string()))?;
        let secret = std::env::var("BFX_API_SECRET")
            .map_err(|_| AuthError::EnvVarNotSet("BFX_API_SECRET".to_string()))?;

        Self::new(api_key, secret)
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign an encoded payload
    ///
    /// Returns the lowercase hex HMAC-SHA384 of `encoded_payload`, keyed by
    /// the secret's UTF-8 bytes.
    pub fn sign(&self, encoded_payload: &str) -> AuthResult<String> {
        let mut mac = HmacSha384::new_from_slice(self.secret.expose_secret().as_bytes())
            .map_err(|e| AuthError::InvalidCredentials(e.to_string()))?;
        mac.update(encoded_payload.as_bytes());

        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            secret: SecretString::from(self.secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field(
                "api_key",
                &format!("{}...", &self.api_key[..8.min(self.api_key.len())]),
            )
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("test_api_key_123", "super_secret_value").unwrap();
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super_secret_value"));
        assert!(!debug.contains("test_api_key_123"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_empty_values_rejected() {
        assert!(matches!(
            Credentials::new("", "secret"),
            Err(AuthError::InvalidCredentials(_))
        ));
        assert!(matches!(
            Credentials::new("key", ""),
            Err(AuthError::InvalidCredentials(_))
        ));
    }

    #[test]
    fn test_signature_is_hex_sha384() {
        let creds = Credentials::new("key", "secret").unwrap();
        let signature = creds.sign("eyJub25jZSI6IjEifQ==").unwrap();

        assert_eq!(signature.len(), 96);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_signature_verifies_with_secret() {
        let creds = Credentials::new("key", "secret").unwrap();
        let payload = "eyJyZXF1ZXN0IjoiL3YxL2JhbGFuY2VzIn0=";
        let signature = hex::decode(creds.sign(payload).unwrap()).unwrap();

        let mut mac = HmacSha384::new_from_slice(b"secret").unwrap();
        mac.update(payload.as_bytes());
        assert!(mac.verify_slice(&signature).is_ok());

        let other = Credentials::new("key", "other").unwrap();
        assert_ne!(other.sign(payload).unwrap(), creds.sign(payload).unwrap());
    }

    #[test]
    fn test_clone_keeps_secret() {
        let creds = Credentials::new("key", "secret").unwrap();
        let cloned = creds.clone();
        assert_eq!(cloned.api_key(), "key");
        assert_eq!(cloned.sign("abc").unwrap(), creds.sign("abc").unwrap());
    }
}
