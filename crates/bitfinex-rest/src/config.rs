//! Client configuration

use bitfinex_auth::Credentials;
use bitfinex_types::{Command, Symbol};
use std::time::Duration;

use crate::error::{RestError, RestResult};

/// Protocols the base URL may use
pub const SUPPORTED_PROTOCOLS: [&str; 2] = ["http", "https"];
/// API versions the base URL may use
pub const SUPPORTED_VERSIONS: [&str; 1] = ["v1"];

/// Production API host
pub const DEFAULT_HOST: &str = "api.bitfinex.com";

/// Default request timeout
///
/// Requests are never retried.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Validated base URL, `<protocol>://<host>/<version>/`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiUrl {
    protocol: String,
    host: String,
    version: String,
}

impl ApiUrl {
    /// Build a base URL, checking protocol and version against the allow-lists
    pub fn new(
        protocol: impl Into<String>,
        host: impl Into<String>,
        version: impl Into<String>,
    ) -> RestResult<Self> {
        let protocol = protocol.into();
        let host = host.into();
        let version = version.into();

        if !SUPPORTED_PROTOCOLS.contains(&protocol.as_str())
            || !SUPPORTED_VERSIONS.contains(&version.as_str())
        {
            return Err(RestError::Configuration(format!(
                "Invalid component used in constructing Bitfinex API URL: protocol={}, version={}",
                protocol, version
            )));
        }
        if host.is_empty() || host.contains('/') {
            return Err(RestError::Configuration(format!(
                "Invalid host used in constructing Bitfinex API URL: {:?}",
                host
            )));
        }

        Ok(Self {
            protocol,
            host,
            version,
        })
    }

    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Base URL with a trailing slash
    pub fn base(&self) -> String {
        format!("{}://{}/{}/", self.protocol, self.host, self.version)
    }

    /// Full URL for a command, with the symbol segment when given
    pub fn command_url(&self, command: Command, symbol: Option<Symbol>) -> String {
        match symbol {
            Some(symbol) => format!("{}{}/{}", self.base(), command, symbol),
            None => format!("{}{}", self.base(), command),
        }
    }

    /// Path placed in the `request` field of authenticated payloads
    pub fn request_path(&self, command: Command) -> String {
        format!("/{}/{}", self.version, command)
    }
}

impl Default for ApiUrl {
    fn default() -> Self {
        Self {
            protocol: "https".to_string(),
            host: DEFAULT_HOST.to_string(),
            version: "v1".to_string(),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Base URL of the API
    pub api_url: ApiUrl,
    /// Request timeout
    pub timeout: Duration,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Compare the live pair list with the known pairs on connect
    pub verify_pairs: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            api_url: ApiUrl::default(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            verify_pairs: true,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set the base URL
    pub fn with_api_url(mut self, api_url: ApiUrl) -> Self {
        self.api_url = api_url;
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Enable or disable the pair-list check on connect
    pub fn with_verify_pairs(mut self, verify: bool) -> Self {
        self.verify_pairs = verify;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitfinex_types::{Currency, Pair};

    #[test]
    fn test_default_base_url() {
        assert_eq!(ApiUrl::default().base(), "https://api.bitfinex.com/v1/");
    }

    #[test]
    fn test_rejects_unknown_components() {
        assert!(matches!(
            ApiUrl::new("ftp", DEFAULT_HOST, "v1"),
            Err(RestError::Configuration(_))
        ));
        assert!(ApiUrl::new("https", DEFAULT_HOST, "v2").is_err());
        assert!(ApiUrl::new("https", "", "v1").is_err());
        assert!(ApiUrl::new("http", "127.0.0.1:8080", "v1").is_ok());
    }

    #[test]
    fn test_command_urls() {
        let url = ApiUrl::default();
        assert_eq!(
            url.command_url(Command::Ticker, Some(Pair::BtcUsd.into())),
            "https://api.bitfinex.com/v1/ticker/btcusd"
        );
        assert_eq!(
            url.command_url(Command::Lendbook, Some(Currency::Usd.into())),
            "https://api.bitfinex.com/v1/lendbook/usd"
        );
        assert_eq!(
            url.command_url(Command::Symbols, None),
            "https://api.bitfinex.com/v1/symbols"
        );
        assert_eq!(url.request_path(Command::OrderStatus), "/v1/order/status");
    }

    #[test]
    fn test_client_config_builder() {
        let config = ClientConfig::new()
            .with_timeout(Duration::from_millis(250))
            .with_user_agent("test-agent")
            .with_verify_pairs(false);

        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.user_agent, Some("test-agent".to_string()));
        assert!(!config.verify_pairs);
        assert!(config.credentials.is_none());
    }

    #[test]
    fn test_default_timeout_is_short() {
        assert_eq!(ClientConfig::default().timeout, Duration::from_secs(1));
    }
}
