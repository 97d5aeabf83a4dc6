//! Public market data endpoints
//!
//! These endpoints don't require authentication. Each returns the decoded
//! response with decimal fields converted, or an empty object when the
//! request failed remotely.

use bitfinex_types::{ApiValue, Command, Pair};
use tracing::{debug, instrument};

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::{BookLimits, TradesQuery};

/// Public market data endpoints
pub struct MarketEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> MarketEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get ticker for a pair
    ///
    /// Decodes into [`TickerInfo`](crate::types::TickerInfo).
    #[instrument(skip(self))]
    pub async fn ticker(&self, pair: Pair) -> RestResult<ApiValue> {
        debug!("Fetching ticker for {}", pair);
        self.dispatcher.dispatch(Command::Ticker, Some(pair.into()), None).await
    }

    /// Get today's low, high and volume for a pair
    #[instrument(skip(self))]
    pub async fn today(&self, pair: Pair) -> RestResult<ApiValue> {
        debug!("Fetching daily summary for {}", pair);
        self.dispatcher.dispatch(Command::Today, Some(pair.into()), None).await
    }

    /// Get the order book for a pair
    ///
    /// # Arguments
    /// * `pair` - Trading pair
    /// * `limits` - Number of bids and asks to return
    #[instrument(skip(self))]
    pub async fn orderbook(&self, pair: Pair, limits: BookLimits) -> RestResult<ApiValue> {
        debug!("Fetching orderbook for {} ({} bids, {} asks)", pair, limits.bids, limits.asks);
        let payload = limits.to_payload();
        self.dispatcher
            .dispatch(Command::Book, Some(pair.into()), Some(&payload))
            .await
    }

    /// Get recent trades for a pair
    #[instrument(skip(self))]
    pub async fn trades(&self, pair: Pair, query: TradesQuery) -> RestResult<ApiValue> {
        debug!("Fetching trades for {}", pair);
        let payload = query.to_payload();
        self.dispatcher
            .dispatch(Command::Trades, Some(pair.into()), Some(&payload))
            .await
    }

    /// Get the list of tradable pairs
    #[instrument(skip(self))]
    pub async fn pairs(&self) -> RestResult<ApiValue> {
        debug!("Fetching pair list");
        self.dispatcher.dispatch(Command::Symbols, None, None).await
    }
}
