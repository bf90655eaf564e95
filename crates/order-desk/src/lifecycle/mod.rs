//! # Desk Lifecycle
//!
//! Starting, configuring and stopping the order desk.
//!
//! [`OrderDesk::new`] spawns the order book on the current Tokio runtime and
//! wraps its handle in an [`OrderClient`](crate::clients::OrderClient).
//! [`OrderDesk::shutdown`] drops that client; once every clone is gone the
//! book's receiver yields `None`, the task finishes the requests already queued
//! and exits.
//!
//! Configuration comes from [`DeskConfig`]. Defaults are fine for the demo;
//! `ORDER_DESK_BUFFER` resizes the request queue.
//!
//! Logging is installed once per process with [`setup_tracing`]:
//!
//! ```bash
//! RUST_LOG=info cargo run -p order-desk    # label transitions
//! RUST_LOG=debug cargo run -p order-desk   # every request with payloads
//! ```

pub mod config;
pub mod order_desk;

pub use config::*;
pub use order_desk::*;
pub use record_actor::tracing::setup_tracing;
