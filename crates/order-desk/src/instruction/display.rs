use super::label::DisplayStatus;
use super::text::{is_blank, non_blank};
use crate::model::Order;

/// Derives the dashboard status from tracking-link presence and the carrier status.
pub fn derive_display_status(order: &Order) -> DisplayStatus {
    if is_blank(order.tracking_link.as_deref()) {
        return DisplayStatus::Empty;
    }
    match non_blank(order.delivery_status.as_deref()) {
        Some(status) => DisplayStatus::Carrier(status.to_uppercase()),
        None => DisplayStatus::Pending,
    }
}
