//! Public lending endpoints

use bitfinex_types::{ApiValue, Command, Currency};
use tracing::{debug, instrument};

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::{BookLimits, LendsQuery};

/// Public lending endpoints
pub struct LendingEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> LendingEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get the lending book for a currency
    ///
    /// Bids are loan demands, asks are loan offers.
    #[instrument(skip(self))]
    pub async fn lendbook(&self, currency: Currency, limits: BookLimits) -> RestResult<ApiValue> {
        debug!("Fetching lendbook for {}", currency);
        let payload = limits.to_payload();
        self.dispatcher
            .dispatch(Command::Lendbook, Some(currency.into()), Some(&payload))
            .await
    }

    /// Get completed loans for a currency
    #[instrument(skip(self))]
    pub async fn lends(&self, currency: Currency, query: LendsQuery) -> RestResult<ApiValue> {
        debug!("Fetching lends for {}", currency);
        let payload = query.to_payload();
        self.dispatcher
            .dispatch(Command::Lends, Some(currency.into()), Some(&payload))
            .await
    }
}
