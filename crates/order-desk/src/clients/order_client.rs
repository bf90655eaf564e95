//! # Order Client
//!
//! Typed facade over the order book. Route handlers and the demo go through
//! this client; none of them build [`RecordRequest`](record_actor::RecordRequest)s
//! by hand.

use crate::instruction::{DisplayStatus, InstructionLabel, InstructionSummary};
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use async_trait::async_trait;
use record_actor::{RecordClient, StoreClient, StoreError};
use tracing::{debug, info, instrument};

/// Client for interacting with the order book.
#[derive(Clone)]
pub struct OrderClient {
    inner: RecordClient<Order>,
}

impl OrderClient {
    pub fn new(inner: RecordClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("create_order called");
        let id = self.inner.create(params).await?;
        info!(order_id = %id, "Order created");
        Ok(id)
    }

    /// Applies a patch and returns the order with its re-derived label.
    #[instrument(skip(self))]
    pub async fn update_order(&self, id: OrderId, update: OrderUpdate) -> Result<Order, OrderError> {
        debug!("update_order called");
        Ok(self.inner.update(id, update).await?)
    }

    /// Records the payments provider's verdict and the customer it belongs to.
    #[instrument(skip(self))]
    pub async fn record_payment(
        &self,
        id: OrderId,
        paid: bool,
        stripe_customer_id: &str,
    ) -> Result<Order, OrderError> {
        let update = OrderUpdate {
            paid: Some(paid),
            stripe_customer_id: Some(stripe_customer_id.to_string()),
            ..OrderUpdate::default()
        };
        self.update_order(id, update).await
    }

    /// Records a label created with the carrier.
    #[instrument(skip(self))]
    pub async fn record_tracking(
        &self,
        id: OrderId,
        tracking_link: &str,
        shipping_id: &str,
    ) -> Result<Order, OrderError> {
        let update = OrderUpdate {
            tracking_link: Some(tracking_link.to_string()),
            shipping_id: Some(shipping_id.to_string()),
            ..OrderUpdate::default()
        };
        self.update_order(id, update).await
    }

    /// Records the carrier's latest status string as reported.
    #[instrument(skip(self))]
    pub async fn record_delivery_status(
        &self,
        id: OrderId,
        delivery_status: &str,
    ) -> Result<Order, OrderError> {
        let update = OrderUpdate {
            delivery_status: Some(delivery_status.to_string()),
            ..OrderUpdate::default()
        };
        self.update_order(id, update).await
    }

    /// Label derived from the order as it is stored right now.
    #[instrument(skip(self))]
    pub async fn instruction(&self, id: OrderId) -> Result<InstructionLabel, OrderError> {
        self.evaluate(id).await.map(|(instruction, _)| instruction)
    }

    #[instrument(skip(self))]
    pub async fn display_status(&self, id: OrderId) -> Result<DisplayStatus, OrderError> {
        self.evaluate(id).await.map(|(_, status)| status)
    }

    /// Re-derives and stores the label; returns `(previous, current)`.
    #[instrument(skip(self))]
    pub async fn refresh_instruction(
        &self,
        id: OrderId,
    ) -> Result<(Option<InstructionLabel>, InstructionLabel), OrderError> {
        match self
            .inner
            .perform_action(id, OrderAction::RefreshInstruction)
            .await?
        {
            OrderActionResult::RefreshInstruction { previous, current } => Ok((previous, current)),
            other => Err(OrderError::UnexpectedResult(format!("{other:?}"))),
        }
    }

    /// Orders whose cached label is `label`, in id order.
    #[instrument(skip(self))]
    pub async fn orders_with_instruction(
        &self,
        label: InstructionLabel,
    ) -> Result<Vec<Order>, OrderError> {
        self.list(move |order: &Order| order.instruction == Some(label))
            .await
    }

    /// Badge counts over every order in the book.
    #[instrument(skip(self))]
    pub async fn instruction_summary(&self) -> Result<InstructionSummary, OrderError> {
        let orders = self.list(|_: &Order| true).await?;
        let summary = InstructionSummary::from_orders(&orders);
        debug!(total = summary.total(), "Summary computed");
        Ok(summary)
    }

    async fn evaluate(&self, id: OrderId) -> Result<(InstructionLabel, DisplayStatus), OrderError> {
        match self.inner.perform_action(id, OrderAction::Evaluate).await? {
            OrderActionResult::Evaluate {
                instruction,
                display_status,
            } => Ok((instruction, display_status)),
            other => Err(OrderError::UnexpectedResult(format!("{other:?}"))),
        }
    }
}

#[async_trait]
impl StoreClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &RecordClient<Order> {
        &self.inner
    }

    fn map_error(e: StoreError) -> Self::Error {
        OrderError::from(e)
    }
}
