//! Credentials and request signing for the Bitfinex v1 API
//!
//! Bitfinex v1 authenticates a request through three headers:
//!
//! - `X-BFX-PAYLOAD` - base64 of the JSON payload
//! - `X-BFX-APIKEY` - the API key
//! - `X-BFX-SIGNATURE` - hex HMAC-SHA384 of the base64 payload, keyed by the secret
//!
//! Public commands that take parameters send only the payload header.
//!
//! # Example
//!
//! ```no_run
//! use bitfinex_auth::{generate_nonce, Credentials, RequestSigner};
//! use bitfinex_types::Payload;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let creds = Credentials::from_env()?;
//! let signer = RequestSigner::new(Some(&creds));
//!
//! let payload = Payload::new()
//!     .with("request", "/v1/balances")
//!     .with("nonce", generate_nonce());
//! let headers = signer.sign(true, &payload)?;
//! for (name, value) in headers.iter() {
//!     println!("{}: {}", name, value);
//! }
//! # Ok(())
//! # }
//! ```

mod credentials;
mod error;
mod nonce;
mod signer;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use nonce::{generate_nonce, next_nonce, NONCE_SCALE};
pub use signer::{
    RequestHeaders, RequestSigner, HEADER_API_KEY, HEADER_PAYLOAD, HEADER_SIGNATURE,
};
