//! # Order Desk
//!
//! Tells warehouse staff what to do next with each order.
//!
//! - [`instruction`] - the pure engine: `derive_instruction` and `derive_display_status`.
//! - [`model`] - the [`Order`](model::Order) row and its create/patch payloads.
//! - [`order_actor`] - the in-memory order book that caches each order's label.
//! - [`clients`] - [`OrderClient`](clients::OrderClient), the typed handle to the book.
//! - [`lifecycle`] - configuration, startup and shutdown.

pub mod clients;
pub mod instruction;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
