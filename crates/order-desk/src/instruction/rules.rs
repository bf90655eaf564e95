//! The instruction decision table.
//!
//! Rules are evaluated top to bottom and the first one whose predicate holds
//! decides the label. Later rules are never consulted once one matches, even if
//! they would also hold; [`matching_rules`] exposes every match so that overlap
//! can be inspected and tested.

use super::label::InstructionLabel;
use super::text::{is_blank, non_blank, starts_with_https, DELIVERED, READY_TO_SEND};
use crate::model::Order;

/// The order fields the rules look at, normalized once per evaluation.
///
/// `paid` stays an `Option` because the rules compare it strictly: an unknown
/// payment state satisfies neither "paid" nor "unpaid".
#[derive(Debug, Clone, Copy)]
pub struct OrderFacts<'a> {
    pub paid: Option<bool>,
    pub has_billing: bool,
    pub has_shipping_id: bool,
    /// Raw carrier status when it is not blank.
    pub delivery_status: Option<&'a str>,
    /// Raw tracking link when it is not blank.
    pub tracking_link: Option<&'a str>,
}

impl<'a> OrderFacts<'a> {
    pub fn of(order: &'a Order) -> Self {
        Self {
            paid: order.paid,
            has_billing: !is_blank(order.stripe_customer_id.as_deref()),
            has_shipping_id: !is_blank(order.shipping_id.as_deref()),
            delivery_status: non_blank(order.delivery_status.as_deref()),
            tracking_link: non_blank(order.tracking_link.as_deref()),
        }
    }

    fn has_delivery_status(&self) -> bool {
        self.delivery_status.is_some()
    }

    fn has_tracking(&self) -> bool {
        self.tracking_link.is_some()
    }

    /// Payment confirmed and tied to a billing identity.
    fn paid_and_billed(&self) -> bool {
        self.paid == Some(true) && self.has_billing
    }

    fn status_is(&self, status: &str) -> bool {
        self.delivery_status == Some(status)
    }
}

/// One row of the decision table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub label: InstructionLabel,
    predicate: fn(&OrderFacts<'_>) -> bool,
}

impl Rule {
    pub fn applies(&self, facts: &OrderFacts<'_>) -> bool {
        (self.predicate)(facts)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("label", &self.label).finish()
    }
}

/// Label used when no rule matches.
pub const FALLBACK: InstructionLabel = InstructionLabel::ActionRequired;

/// The table, in precedence order.
pub const RULES: [Rule; 6] = [
    Rule {
        label: InstructionLabel::Delivered,
        predicate: delivered,
    },
    Rule {
        label: InstructionLabel::Shipped,
        predicate: shipped,
    },
    Rule {
        label: InstructionLabel::ToBeShippedButNoSticker,
        predicate: to_be_shipped_but_no_sticker,
    },
    Rule {
        label: InstructionLabel::ToShip,
        predicate: to_ship,
    },
    Rule {
        label: InstructionLabel::DoNotShip,
        predicate: do_not_ship,
    },
    Rule {
        label: InstructionLabel::NoActionRequired,
        predicate: no_action_required,
    },
];

fn delivered(f: &OrderFacts<'_>) -> bool {
    f.has_delivery_status() && f.paid_and_billed() && f.status_is(DELIVERED)
}

fn shipped(f: &OrderFacts<'_>) -> bool {
    f.has_delivery_status()
        && !f.status_is(READY_TO_SEND)
        && f.paid_and_billed()
        && !f.status_is(DELIVERED)
        && f.has_tracking()
}

/// Paid, nothing reported by the carrier, and no usable https tracking link.
fn to_be_shipped_but_no_sticker(f: &OrderFacts<'_>) -> bool {
    !f.has_delivery_status()
        && f.paid_and_billed()
        && f.tracking_link.map_or(true, |link| !starts_with_https(link))
}

fn to_ship(f: &OrderFacts<'_>) -> bool {
    f.status_is(READY_TO_SEND) && f.paid_and_billed() && f.has_tracking()
}

fn do_not_ship(f: &OrderFacts<'_>) -> bool {
    f.has_tracking() && f.paid == Some(false) && !f.has_delivery_status()
}

fn no_action_required(f: &OrderFacts<'_>) -> bool {
    f.has_tracking() && f.paid_and_billed() && f.has_shipping_id && !f.status_is(DELIVERED)
}

/// Derives the single instruction label for `order`.
///
/// Total and deterministic: every order, including one with every field unset,
/// yields exactly one label, falling back to [`InstructionLabel::ActionRequired`].
pub fn derive_instruction(order: &Order) -> InstructionLabel {
    let facts = OrderFacts::of(order);
    RULES
        .iter()
        .find(|rule| rule.applies(&facts))
        .map_or(FALLBACK, |rule| rule.label)
}

/// Every rule label whose predicate holds for `order`, in precedence order.
///
/// The first entry, or [`FALLBACK`] when empty, is what [`derive_instruction`] returns.
pub fn matching_rules(order: &Order) -> Vec<InstructionLabel> {
    let facts = OrderFacts::of(order);
    RULES
        .iter()
        .filter(|rule| rule.applies(&facts))
        .map(|rule| rule.label)
        .collect()
}
