//! # Record Actor
//!
//! An in-memory record store run as a Tokio actor. One task owns every row of a
//! given type and serves insert, read, patch, delete, custom-action and
//! filter requests sent over a channel. Callers hold a cheap cloneable
//! [`RecordClient`] and never touch the rows directly.
//!
//! ## Layers
//!
//! 1. **Record** ([`Record`]) - the row type, its payloads and its lifecycle hooks.
//! 2. **Actor** ([`RecordActor`]) - the task that owns the rows and runs the hooks.
//! 3. **Client** ([`RecordClient`], [`StoreClient`]) - the typed request surface.
//!
//! ## Concurrency Model
//!
//! - Each store runs in its own task and handles one request at a time, so a
//!   request always observes a consistent snapshot of a row.
//! - Many clients may send concurrently; the bounded channel queues them.
//! - Dropping every client closes the channel and ends the task.
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`RecordActor::run`] rather than to
//! [`RecordActor::new`], so two stores that need each other's clients can both be
//! created before either starts.
//!
//! ## Testing
//!
//! [`mock::MockStore`] answers client requests from a script, for testing code
//! that wraps a client without a live store.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod message;
pub mod mock;
pub mod record;
pub mod tracing;

pub use actor::RecordActor;
pub use client::RecordClient;
pub use client_trait::StoreClient;
pub use error::StoreError;
pub use message::{Filter, RecordRequest, Response};
pub use record::Record;
