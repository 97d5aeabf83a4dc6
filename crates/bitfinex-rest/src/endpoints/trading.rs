//! Private trading endpoints
//!
//! These endpoints require authentication. Without credentials they fail
//! with [`AuthError::MissingSecret`](bitfinex_auth::AuthError::MissingSecret)
//! before any request is made.

use bitfinex_types::{ApiValue, Command};
use tracing::{debug, instrument};

use crate::dispatch::Dispatcher;
use crate::error::RestResult;
use crate::types::OrderRequest;

/// Private trading endpoints
pub struct TradingEndpoints<'a> {
    dispatcher: &'a Dispatcher,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(dispatcher: &'a Dispatcher) -> Self {
        Self { dispatcher }
    }

    /// Place a new order
    ///
    /// Decodes into [`OrderInfo`](crate::types::OrderInfo).
    #[instrument(skip(self))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<ApiValue> {
        debug!(
            "Placing {} {} order: {} {} @ {}",
            order.order_type, order.side, order.amount, order.pair, order.price
        );

        let mut payload = self.dispatcher.authenticated_payload(Command::OrderNew);
        order.extend_payload(&mut payload);

        self.dispatcher
            .dispatch(Command::OrderNew, Some(order.pair.into()), Some(&payload))
            .await
    }

    /// Cancel an order
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: i64) -> RestResult<ApiValue> {
        debug!("Cancelling order {}", order_id);
        self.by_order_id(Command::OrderCancel, order_id).await
    }

    /// Get the status of an order
    #[instrument(skip(self))]
    pub async fn order_status(&self, order_id: i64) -> RestResult<ApiValue> {
        debug!("Fetching status of order {}", order_id);
        self.by_order_id(Command::OrderStatus, order_id).await
    }

    /// Get all open orders
    #[instrument(skip(self))]
    pub async fn open_orders(&self) -> RestResult<ApiValue> {
        debug!("Fetching open orders");
        let payload = self.dispatcher.authenticated_payload(Command::Orders);
        self.dispatcher
            .dispatch(Command::Orders, None, Some(&payload))
            .await
    }

    async fn by_order_id(&self, command: Command, order_id: i64) -> RestResult<ApiValue> {
        let payload = self
            .dispatcher
            .authenticated_payload(command)
            .with("order_id", order_id);
        self.dispatcher.dispatch(command, None, Some(&payload)).await
    }
}
