//! An order row as the back office sees it.
//!
//! # Record Store
//! This struct implements the [`Record`](record_actor::Record) trait (see
//! [`order_actor`](crate::order_actor)), so the order book can hold it in a
//! [`RecordActor`](record_actor::RecordActor).
//!
//! Every field the instruction engine reads is optional: rows come from a
//! database where any of them may be `NULL`, and a missing JSON key means the
//! same thing as `null`.

use crate::instruction::InstructionLabel;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// A value of the wrong type reads as absent instead of failing the row.
#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Malformed(IgnoredAny),
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(match Lenient::<T>::deserialize(deserializer)? {
        Lenient::Value(value) => Some(value),
        Lenient::Malformed(_) => None,
    })
}

fn lenient_id<'de, D>(deserializer: D) -> Result<OrderId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    #[serde(deserialize_with = "lenient_id")]
    pub id: OrderId,
    /// Whether payment succeeded; `None` when the provider has not said.
    #[serde(deserialize_with = "lenient")]
    pub paid: Option<bool>,
    /// Payments-provider customer id; its presence is the billing identity.
    #[serde(deserialize_with = "lenient")]
    pub stripe_customer_id: Option<String>,
    /// Free-text carrier status such as `Ready to send` or `Delivered`.
    #[serde(deserialize_with = "lenient")]
    pub delivery_status: Option<String>,
    /// Tracking URL, the `Empty label` placeholder, or nothing.
    #[serde(deserialize_with = "lenient")]
    pub tracking_link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub shipping_id: Option<String>,
    /// Label last derived by the order book. Never read by the engine.
    #[serde(deserialize_with = "lenient")]
    pub instruction: Option<InstructionLabel>,
}

/// Payload for inserting an order. Malformed fields read as absent, as on [`Order`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderCreate {
    #[serde(deserialize_with = "lenient")]
    pub paid: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub stripe_customer_id: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub delivery_status: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tracking_link: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub shipping_id: Option<String>,
}

/// Patch for an existing order. `None` leaves a field as it is; to clear a
/// text field, set it to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderUpdate {
    pub paid: Option<bool>,
    pub stripe_customer_id: Option<String>,
    pub delivery_status: Option<String>,
    pub tracking_link: Option<String>,
    pub shipping_id: Option<String>,
}

impl Order {
    /// Builds an order from its insert payload. The cached label starts unset.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            paid: params.paid,
            stripe_customer_id: params.stripe_customer_id,
            delivery_status: params.delivery_status,
            tracking_link: params.tracking_link,
            shipping_id: params.shipping_id,
            instruction: None,
        }
    }

    /// Overwrites every field the patch sets.
    pub fn apply(&mut self, update: OrderUpdate) {
        if let Some(paid) = update.paid {
            self.paid = Some(paid);
        }
        if let Some(customer) = update.stripe_customer_id {
            self.stripe_customer_id = Some(customer);
        }
        if let Some(status) = update.delivery_status {
            self.delivery_status = Some(status);
        }
        if let Some(link) = update.tracking_link {
            self.tracking_link = Some(link);
        }
        if let Some(shipping_id) = update.shipping_id {
            self.shipping_id = Some(shipping_id);
        }
    }
}

impl From<Order> for OrderCreate {
    fn from(order: Order) -> Self {
        Self {
            paid: order.paid,
            stripe_customer_id: order.stripe_customer_id,
            delivery_status: order.delivery_status,
            tracking_link: order.tracking_link,
            shipping_id: order.shipping_id,
        }
    }
}
