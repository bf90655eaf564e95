//! # Instruction Engine
//!
//! Turns an order's payment, billing, carrier and tracking fields into the
//! shipping instruction staff act on, and into the short status shown beside
//! the order.
//!
//! Both derivations are pure: no I/O, no shared state, and the same order
//! always yields the same answer. They never fail; absent or blank fields simply
//! fail the predicates that need them, which steers the order toward
//! [`InstructionLabel::ActionRequired`] or [`DisplayStatus::Empty`] /
//! [`DisplayStatus::Pending`].
//!
//! ```rust
//! use order_desk::instruction::{derive_display_status, derive_instruction, InstructionLabel};
//! use order_desk::model::Order;
//!
//! let order: Order = serde_json::from_str(
//!     r#"{"paid": true, "stripe_customer_id": "cus_1",
//!         "delivery_status": "Ready to send", "tracking_link": "https://t"}"#,
//! ).unwrap();
//!
//! assert_eq!(derive_instruction(&order), InstructionLabel::ToShip);
//! assert_eq!(derive_display_status(&order).to_string(), "READY TO SEND");
//! ```

mod display;
mod label;
pub mod rules;
mod summary;
pub mod text;

pub use display::derive_display_status;
pub use label::{DisplayStatus, InstructionLabel};
pub use rules::{derive_instruction, matching_rules};
pub use summary::InstructionSummary;
