//! Command dispatch
//!
//! Every public operation ends up here: the command and symbol are checked
//! against the static tables, the URL is assembled, the payload is encoded
//! (and signed for authenticated commands), and the JSON reply is decoded
//! with exact decimals.

use bitfinex_auth::{generate_nonce, Credentials, RequestHeaders, RequestSigner};
use bitfinex_types::{decimalize_response, ApiValue, Command, InputError, Payload, Symbol};
use reqwest::Client;
use tracing::{debug, instrument, warn};

use crate::config::ApiUrl;
use crate::error::{RestError, RestResult};

/// Request ready to be sent
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    /// Full command URL
    pub url: String,
    /// Payload headers, absent when there is nothing to send
    pub headers: Option<RequestHeaders>,
}

/// Validates, signs and sends commands
#[derive(Clone)]
pub struct Dispatcher {
    http_client: Client,
    api_url: ApiUrl,
    credentials: Option<Credentials>,
}

impl Dispatcher {
    pub fn new(http_client: Client, api_url: ApiUrl, credentials: Option<Credentials>) -> Self {
        Self {
            http_client,
            api_url,
            credentials,
        }
    }

    pub fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Check if credentials are configured
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    /// Start a payload for an authenticated command
    ///
    /// Carries the `request` path and a fresh nonce.
    pub fn authenticated_payload(&self, command: Command) -> Payload {
        Payload::new()
            .with("request", self.api_url.request_path(command))
            .with("nonce", generate_nonce())
    }

    /// Validate a command and build its URL and headers without sending it
    ///
    /// Authenticated commands are always signed, even with an empty payload,
    /// so a missing secret is reported before anything goes out.
    pub fn prepare(
        &self,
        command: Command,
        symbol: Option<Symbol>,
        payload: Option<&Payload>,
    ) -> RestResult<PreparedRequest> {
        command.check_symbol(symbol.as_ref())?;

        let url = self.api_url.command_url(command, symbol);
        let signer = RequestSigner::new(self.credentials.as_ref());

        let headers = match payload {
            _ if command.is_authenticated() => {
                let empty = Payload::new();
                Some(signer.sign(true, payload.unwrap_or(&empty))?)
            }
            Some(payload) if !payload.is_empty() => Some(signer.sign(false, payload)?),
            _ => None,
        };

        Ok(PreparedRequest { url, headers })
    }

    /// Send a command, returning every failure to the caller
    #[instrument(skip_all, fields(command = %command, symbol = ?symbol))]
    pub async fn try_dispatch(
        &self,
        command: Command,
        symbol: Option<Symbol>,
        payload: Option<&Payload>,
    ) -> RestResult<ApiValue> {
        let request = self.prepare(command, symbol, payload)?;

        debug!(
            url = %request.url,
            signed = request.headers.as_ref().is_some_and(RequestHeaders::is_authenticated),
            "Sending request"
        );

        let mut builder = self.http_client.get(&request.url);
        if let Some(headers) = &request.headers {
            for (name, value) in headers.iter() {
                builder = builder.header(name, value);
            }
        }

        let response = builder.send().await?;
        debug!(status = %response.status(), "Received response");

        let body = response.bytes().await?;
        let json: serde_json::Value =
            serde_json::from_slice(&body).map_err(|e| RestError::Decode(e.to_string()))?;

        decimalize_response(json).map_err(|e| RestError::Decode(e.to_string()))
    }

    /// Send a command, degrading remote failures to an empty object
    ///
    /// Input and signing errors are returned as errors. Transport and decode
    /// failures are logged at `warn` level and yield
    /// [`ApiValue::empty_object`], so an empty result may also mean the
    /// request failed. Use [`try_dispatch`](Self::try_dispatch) to tell the
    /// two apart.
    pub async fn dispatch(
        &self,
        command: Command,
        symbol: Option<Symbol>,
        payload: Option<&Payload>,
    ) -> RestResult<ApiValue> {
        match self.try_dispatch(command, symbol, payload).await {
            Err(err) if err.is_remote() => {
                warn!(
                    url = %self.api_url.command_url(command, symbol),
                    payload = %payload.map(Payload::to_canonical_json).unwrap_or_default(),
                    "Error in response to a Bitfinex API command: {}",
                    err
                );
                Ok(ApiValue::empty_object())
            }
            other => other,
        }
    }

    /// [`dispatch`](Self::dispatch) for a command and symbol given as strings
    ///
    /// Unknown commands are rejected with [`InputError::UnknownCommand`];
    /// unknown symbols with [`InputError::InvalidScope`] naming the pair.
    pub async fn dispatch_raw(
        &self,
        command: &str,
        symbol: Option<&str>,
        payload: Option<&Payload>,
    ) -> RestResult<ApiValue> {
        let command: Command = command.parse()?;
        let symbol = symbol
            .map(|raw| {
                raw.parse::<Symbol>()
                    .map_err(|_| InputError::invalid_scope(command, Some(raw)))
            })
            .transpose()?;

        self.dispatch(command, symbol, payload).await
    }
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("api_url", &self.api_url.base())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitfinex_auth::{HEADER_API_KEY, HEADER_PAYLOAD};
    use bitfinex_types::{Currency, Pair};

    fn dispatcher(credentials: Option<Credentials>) -> Dispatcher {
        Dispatcher::new(Client::new(), ApiUrl::default(), credentials)
    }

    #[test]
    fn test_prepare_public_without_payload() {
        let request = dispatcher(None)
            .prepare(Command::Ticker, Some(Pair::LtcUsd.into()), None)
            .unwrap();
        assert_eq!(request.url, "https://api.bitfinex.com/v1/ticker/ltcusd");
        assert!(request.headers.is_none());
    }

    #[test]
    fn test_prepare_empty_payload_sends_no_headers() {
        let payload = Payload::new();
        let request = dispatcher(None)
            .prepare(Command::Lendbook, Some(Currency::Usd.into()), Some(&payload))
            .unwrap();
        assert!(request.headers.is_none());
    }

    #[test]
    fn test_prepare_public_payload_is_unsigned() {
        let creds = Credentials::new("key", "secret").unwrap();
        let payload = Payload::new().with("limit_bids", 10u32);
        let request = dispatcher(Some(creds))
            .prepare(Command::Book, Some(Pair::BtcUsd.into()), Some(&payload))
            .unwrap();

        let headers = request.headers.unwrap();
        assert!(!headers.is_authenticated());
        let names: Vec<&str> = headers.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec![HEADER_PAYLOAD]);
    }

    #[test]
    fn test_prepare_authenticated() {
        let creds = Credentials::new("key", "secret").unwrap();
        let dispatcher = dispatcher(Some(creds));
        let payload = dispatcher.authenticated_payload(Command::Orders);

        let request = dispatcher.prepare(Command::Orders, None, Some(&payload)).unwrap();
        assert_eq!(request.url, "https://api.bitfinex.com/v1/orders");

        let headers = request.headers.unwrap();
        assert!(headers.is_authenticated());
        assert!(headers.iter().any(|(name, value)| name == HEADER_API_KEY && value == "key"));
    }

    #[test]
    fn test_prepare_authenticated_without_secret() {
        let dispatcher = dispatcher(None);
        let payload = dispatcher.authenticated_payload(Command::Balances);
        assert!(matches!(
            dispatcher.prepare(Command::Balances, None, Some(&payload)),
            Err(RestError::Auth(bitfinex_auth::AuthError::MissingSecret))
        ));
        assert!(matches!(
            dispatcher.prepare(Command::Balances, None, None),
            Err(RestError::Auth(bitfinex_auth::AuthError::MissingSecret))
        ));
    }

    #[test]
    fn test_prepare_rejects_scope_mismatch() {
        let err = dispatcher(None)
            .prepare(Command::Ticker, Some(Currency::Usd.into()), None)
            .unwrap_err();
        assert!(matches!(
            err,
            RestError::InvalidInput(InputError::InvalidScope { command: Command::Ticker, ref symbol })
                if symbol == "usd"
        ));
    }

    #[test]
    fn test_authenticated_payload_fields() {
        let payload = dispatcher(None).authenticated_payload(Command::OrderCancel);
        assert_eq!(
            payload.get("request"),
            Some(&bitfinex_types::PayloadValue::Str("/v1/order/cancel".to_string()))
        );
        assert!(payload.contains_key("nonce"));
    }
}
