//! Main REST client implementation

use crate::config::ClientConfig;
use crate::dispatch::Dispatcher;
use crate::endpoints::{AccountEndpoints, LendingEndpoints, MarketEndpoints, TradingEndpoints};
use crate::error::RestResult;
use crate::types::{BookLimits, LendsQuery, OrderRequest, TradesQuery};
use bitfinex_auth::Credentials;
use bitfinex_types::{ApiValue, Currency, Pair};
use reqwest::Client;
use std::collections::BTreeSet;
use tracing::{info, warn};

const USER_AGENT: &str = "bitfinex-rest/0.1.0";

/// Outcome of comparing the live pair list with [`Pair::ALL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairCheck {
    /// The exchange lists exactly the known pairs
    Matches,
    /// The exchange lists a different set of pairs
    Mismatch {
        expected: Vec<String>,
        received: Vec<String>,
    },
    /// The pair list was empty or could not be fetched
    Unverified,
}

/// Bitfinex REST API client
///
/// Provides access to both public and private endpoints.
///
/// # Example
///
/// ```no_run
/// use bitfinex_rest::{BitfinexClient, Credentials, Pair};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = BitfinexClient::new()?;
///     let ticker = client.ticker(Pair::BtcUsd).await?;
///
///     // With authentication for private endpoints
///     let creds = Credentials::from_env()?;
///     let auth_client = BitfinexClient::with_credentials(creds)?;
///     let balances = auth_client.balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct BitfinexClient {
    dispatcher: Dispatcher,
}

impl BitfinexClient {
    /// Create a new client without authentication
    ///
    /// Only public endpoints will be available.
    pub fn new() -> RestResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with credentials
    ///
    /// All endpoints (public and private) will be available.
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials))
    }

    /// Create a new client with custom configuration
    ///
    /// Does not contact the exchange; see [`connect`](Self::connect).
    pub fn with_config(config: ClientConfig) -> RestResult<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_deref().unwrap_or(USER_AGENT))
            .build()?;

        info!(
            base_url = %config.api_url.base(),
            authenticated = config.credentials.is_some(),
            "Created Bitfinex REST client"
        );

        Ok(Self {
            dispatcher: Dispatcher::new(http_client, config.api_url, config.credentials),
        })
    }

    /// Create a client and, when enabled in the config, check the pair list
    ///
    /// A mismatched or empty pair list is logged, never fatal.
    pub async fn connect(config: ClientConfig) -> RestResult<Self> {
        let verify = config.verify_pairs;
        let client = Self::with_config(config)?;
        if verify {
            client.verify_pairs().await?;
        }
        Ok(client)
    }

    /// Check if the client has credentials for private endpoints
    pub fn has_credentials(&self) -> bool {
        self.dispatcher.has_credentials()
    }

    /// Get the underlying dispatcher for raw command access
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Compare the exchange's pair list with the pairs this client knows
    pub async fn verify_pairs(&self) -> RestResult<PairCheck> {
        let live = self.pairs().await?;

        let received: BTreeSet<String> = live
            .as_array()
            .unwrap_or_default()
            .iter()
            .filter_map(|pair| pair.as_str().map(str::to_lowercase))
            .collect();

        if received.is_empty() {
            warn!("Unable to verify Bitfinex pairs: empty pair list");
            return Ok(PairCheck::Unverified);
        }

        let expected: BTreeSet<String> = Pair::ALL.iter().map(|p| p.as_str().to_string()).collect();
        if received == expected {
            return Ok(PairCheck::Matches);
        }

        let expected: Vec<String> = expected.into_iter().collect();
        let received: Vec<String> = received.into_iter().collect();
        warn!(
            ?expected,
            ?received,
            "Bitfinex pair list differs from the known pairs"
        );
        Ok(PairCheck::Mismatch { expected, received })
    }

    // ========================================================================
    // Public Market Endpoints
    // ========================================================================

    /// Get market endpoints
    pub fn market(&self) -> MarketEndpoints<'_> {
        MarketEndpoints::new(&self.dispatcher)
    }

    /// Get ticker for a pair
    pub async fn ticker(&self, pair: Pair) -> RestResult<ApiValue> {
        self.market().ticker(pair).await
    }

    /// Get today's low, high and volume for a pair
    pub async fn today(&self, pair: Pair) -> RestResult<ApiValue> {
        self.market().today(pair).await
    }

    /// Get the order book for a pair
    pub async fn orderbook(&self, pair: Pair, limits: BookLimits) -> RestResult<ApiValue> {
        self.market().orderbook(pair, limits).await
    }

    /// Get recent trades for a pair
    pub async fn trades(&self, pair: Pair, query: TradesQuery) -> RestResult<ApiValue> {
        self.market().trades(pair, query).await
    }

    /// Get the list of tradable pairs
    pub async fn pairs(&self) -> RestResult<ApiValue> {
        self.market().pairs().await
    }

    // ========================================================================
    // Public Lending Endpoints
    // ========================================================================

    /// Get lending endpoints
    pub fn lending(&self) -> LendingEndpoints<'_> {
        LendingEndpoints::new(&self.dispatcher)
    }

    /// Get the lending book for a currency
    pub async fn lendbook(&self, currency: Currency, limits: BookLimits) -> RestResult<ApiValue> {
        self.lending().lendbook(currency, limits).await
    }

    /// Get completed loans for a currency
    pub async fn lends(&self, currency: Currency, query: LendsQuery) -> RestResult<ApiValue> {
        self.lending().lends(currency, query).await
    }

    // ========================================================================
    // Private Trading Endpoints
    // ========================================================================

    /// Get trading endpoints (requires credentials)
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(&self.dispatcher)
    }

    /// Place a new order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<ApiValue> {
        self.trading().place_order(order).await
    }

    /// Cancel an order
    pub async fn cancel_order(&self, order_id: i64) -> RestResult<ApiValue> {
        self.trading().cancel_order(order_id).await
    }

    /// Get the status of an order
    pub async fn order_status(&self, order_id: i64) -> RestResult<ApiValue> {
        self.trading().order_status(order_id).await
    }

    /// Get all open orders
    pub async fn open_orders(&self) -> RestResult<ApiValue> {
        self.trading().open_orders().await
    }

    // ========================================================================
    // Private Account Endpoints
    // ========================================================================

    /// Get account endpoints (requires credentials)
    pub fn account(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(&self.dispatcher)
    }

    /// Get wallet balances
    pub async fn balances(&self) -> RestResult<ApiValue> {
        self.account().balances().await
    }
}

impl std::fmt::Debug for BitfinexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitfinexClient")
            .field("base_url", &self.dispatcher.api_url().base())
            .field("has_credentials", &self.has_credentials())
            .finish()
    }
}
