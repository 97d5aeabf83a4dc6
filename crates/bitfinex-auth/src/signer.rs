//! Payload encoding and request signing

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use bitfinex_types::Payload;
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::{AuthError, AuthResult};

/// Header carrying the base64 JSON payload
pub const HEADER_PAYLOAD: &str = "X-BFX-PAYLOAD";
/// Header carrying the API key
pub const HEADER_API_KEY: &str = "X-BFX-APIKEY";
/// Header carrying the hex HMAC-SHA384 signature
pub const HEADER_SIGNATURE: &str = "X-BFX-SIGNATURE";

/// Headers to attach to a request that carries a payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHeaders {
    payload: String,
    api_key: Option<String>,
    signature: Option<String>,
}

impl RequestHeaders {
    /// Base64 payload
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Returns true if the key and signature headers are present
    pub fn is_authenticated(&self) -> bool {
        self.signature.is_some()
    }

    /// Header name/value pairs, payload last
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        let api_key = self.api_key.as_deref().map(|key| (HEADER_API_KEY, key));
        let signature = self.signature.as_deref().map(|sig| (HEADER_SIGNATURE, sig));

        api_key
            .into_iter()
            .chain(signature)
            .chain(std::iter::once((HEADER_PAYLOAD, self.payload.as_str())))
    }
}

/// Builds payload headers, signing them when credentials are available
#[derive(Debug, Clone, Copy)]
pub struct RequestSigner<'a> {
    credentials: Option<&'a Credentials>,
}

impl<'a> RequestSigner<'a> {
    /// Create a signer; `None` can still encode unsigned payloads
    pub fn new(credentials: Option<&'a Credentials>) -> Self {
        Self { credentials }
    }

    /// Base64 of the canonical JSON payload
    pub fn encode_payload(payload: &Payload) -> String {
        BASE64.encode(payload.to_canonical_json().as_bytes())
    }

    /// Produce headers for `payload`
    ///
    /// With `authenticate` false only the payload header is returned. With
    /// `authenticate` true the API key and signature are added, which fails
    /// with [`AuthError::MissingSecret`] when no credentials are configured.
    pub fn sign(&self, authenticate: bool, payload: &Payload) -> AuthResult<RequestHeaders> {
        let encoded = Self::encode_payload(payload);

        if !authenticate {
            return Ok(RequestHeaders {
                payload: encoded,
                api_key: None,
                signature: None,
            });
        }

        let credentials = self.credentials.ok_or(AuthError::MissingSecret)?;
        let signature = credentials.sign(&encoded)?;

        debug!(fields = payload.len(), "Signed authenticated payload");

        Ok(RequestHeaders {
            payload: encoded,
            api_key: Some(credentials.api_key().to_string()),
            signature: Some(signature),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn decode(headers: &RequestHeaders) -> serde_json::Value {
        let bytes = BASE64.decode(headers.payload()).unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_unsigned_payload_only() {
        let signer = RequestSigner::new(None);
        let payload = Payload::new().with("limit_bids", 10u32);

        let headers = signer.sign(false, &payload).unwrap();
        assert!(!headers.is_authenticated());
        assert_eq!(headers.api_key(), None);
        assert_eq!(decode(&headers), serde_json::json!({ "limit_bids": 10 }));

        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![HEADER_PAYLOAD]);
    }

    #[test]
    fn test_authenticated_headers() {
        let creds = Credentials::new("my-key", "my-secret").unwrap();
        let signer = RequestSigner::new(Some(&creds));
        let payload = Payload::new()
            .with("request", "/v1/order/new")
            .with("nonce", "139829543200000")
            .with("price", dec!(574.61));

        let headers = signer.sign(true, &payload).unwrap();
        assert_eq!(headers.api_key(), Some("my-key"));
        assert_eq!(
            headers.signature(),
            Some(creds.sign(headers.payload()).unwrap().as_str())
        );
        assert_eq!(decode(&headers)["price"], serde_json::json!("574.61"));

        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![HEADER_API_KEY, HEADER_SIGNATURE, HEADER_PAYLOAD]);
    }

    #[test]
    fn test_authenticate_without_secret_fails() {
        let signer = RequestSigner::new(None);
        let payload = Payload::new().with("request", "/v1/balances");
        assert!(matches!(
            signer.sign(true, &payload),
            Err(AuthError::MissingSecret)
        ));
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let a = Payload::new().with("b", 1i64).with("a", "x");
        let b = Payload::new().with("a", "x").with("b", 1i64);
        assert_eq!(RequestSigner::encode_payload(&a), RequestSigner::encode_payload(&b));
    }
}
