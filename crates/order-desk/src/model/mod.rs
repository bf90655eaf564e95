//! Plain data types for orders.

pub mod order;

pub use order::*;
