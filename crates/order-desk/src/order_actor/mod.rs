//! # Order Book
//!
//! The in-memory store of orders, run as a [`RecordActor`]. It caches each
//! order's instruction label on the row and answers label-based filters for
//! the dashboard.
//!
//! ## Structure
//!
//! - [`entity`] - [`Record`](record_actor::Record) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - factory returning the actor and its client
//!
//! ## Usage
//!
//! ```rust
//! use order_desk::clients::OrderClient;
//! use order_desk::instruction::InstructionLabel;
//! use order_desk::model::OrderCreate;
//! use order_desk::order_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, store) = order_actor::new(32);
//!     let client = OrderClient::new(store);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client
//!         .create_order(OrderCreate {
//!             paid: Some(true),
//!             stripe_customer_id: Some("cus_1".into()),
//!             ..OrderCreate::default()
//!         })
//!         .await?;
//!
//!     let label = client.instruction(id).await?;
//!     assert_eq!(label, InstructionLabel::ToBeShippedButNoSticker);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use record_actor::{RecordActor, RecordClient};

/// Creates the order book actor and its client. `buffer_size` bounds the request queue.
pub fn new(buffer_size: usize) -> (RecordActor<Order>, RecordClient<Order>) {
    RecordActor::new(buffer_size)
}
