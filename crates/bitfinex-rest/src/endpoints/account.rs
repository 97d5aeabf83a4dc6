//! Private account endpoints

use bitfinex_types::{ApiValue, Command};
use tracing::{debug, instrument};

use crate::dispatch::Dispatcher;
use crate::error::RestResult;

/// Private account endpoints
pub struct AccountEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Get wallet balances
    ///
    /// Decodes into `Vec<`[`BalanceEntry`](crate::types::BalanceEntry)`>`.
    #[instrument(skip(self))]
    pub async fn balances(&self) -> RestResult<ApiValue> {
        debug!("Fetching balances");
        let payload = self.dispatcher.authenticated_payload(Command::Balances);
        self.dispatcher
            .dispatch(Command::Balances, None, Some(&payload))
            .await
    }
}
