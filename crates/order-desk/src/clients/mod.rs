//! Type-safe wrappers around [`RecordClient`](record_actor::RecordClient).

pub mod order_client;

pub use order_client::*;
