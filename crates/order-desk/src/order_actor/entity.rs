//! [`Record`] implementation for [`Order`].
//!
//! The order book keeps each row's instruction label current: it is derived on
//! insert and again after every patch, so filters over the cached label never
//! see a stale value for a row the book itself changed.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::instruction::{derive_display_status, derive_instruction};
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use async_trait::async_trait;
use record_actor::Record;
use tracing::{debug, info};

#[async_trait]
impl Record for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        Ok(Order::new(id, params))
    }

    async fn on_create(&mut self, _ctx: &()) -> Result<(), Self::Error> {
        let instruction = derive_instruction(self);
        self.instruction = Some(instruction);
        debug!(order_id = %self.id, %instruction, "Instruction derived");
        Ok(())
    }

    async fn on_update(&mut self, update: OrderUpdate, _ctx: &()) -> Result<(), Self::Error> {
        self.apply(update);
        let previous = self.instruction;
        let current = derive_instruction(self);
        self.instruction = Some(current);
        if previous != Some(current) {
            info!(order_id = %self.id, ?previous, %current, "Instruction changed");
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &(),
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::Evaluate => Ok(OrderActionResult::Evaluate {
                instruction: derive_instruction(self),
                display_status: derive_display_status(self),
            }),
            OrderAction::RefreshInstruction => {
                let current = derive_instruction(self);
                let previous = self.instruction.replace(current);
                Ok(OrderActionResult::RefreshInstruction { previous, current })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruction::{DisplayStatus, InstructionLabel};

    fn stale_snapshot() -> Order {
        serde_json::from_str(
            r#"{"id": 7, "paid": true, "stripe_customer_id": "cus_7",
                "delivery_status": "Delivered", "instruction": "TO SHIP"}"#,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn refresh_replaces_a_label_cached_elsewhere() {
        let mut order = stale_snapshot();

        let result = order
            .handle_action(OrderAction::RefreshInstruction, &())
            .await
            .unwrap();

        assert_eq!(
            result,
            OrderActionResult::RefreshInstruction {
                previous: Some(InstructionLabel::ToShip),
                current: InstructionLabel::Delivered,
            }
        );
        assert_eq!(order.instruction, Some(InstructionLabel::Delivered));
    }

    #[tokio::test]
    async fn evaluate_leaves_the_cached_label_alone() {
        let mut order = stale_snapshot();

        let result = order.handle_action(OrderAction::Evaluate, &()).await.unwrap();

        assert_eq!(
            result,
            OrderActionResult::Evaluate {
                instruction: InstructionLabel::Delivered,
                display_status: DisplayStatus::Empty,
            }
        );
        assert_eq!(order.instruction, Some(InstructionLabel::ToShip));
    }

    #[tokio::test]
    async fn update_rederives_after_patch() {
        let mut order = stale_snapshot();
        order
            .on_update(
                OrderUpdate {
                    delivery_status: Some("In transit".into()),
                    tracking_link: Some("https://t".into()),
                    ..OrderUpdate::default()
                },
                &(),
            )
            .await
            .unwrap();
        assert_eq!(order.instruction, Some(InstructionLabel::Shipped));
    }
}
