//! # Observability
//!
//! Structured logging for record stores and the services built on them.
//!
//! The actor logs its lifecycle at `info` (`Record actor started`, `Created`,
//! `Updated`, `Deleted`, `Shutdown`), payloads and reads at `debug`, and rejected
//! requests at `warn`. Every event carries `entity_type` plus the row id when
//! there is one.
//!
//! ```bash
//! RUST_LOG=info cargo run            # lifecycle only
//! RUST_LOG=debug cargo run           # payloads and list sizes
//! RUST_LOG=record_actor=debug,info   # store internals only
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber: `RUST_LOG` filtering, compact lines, no module targets.
///
/// Panics if a global subscriber is already set; use [`try_setup_tracing`] where
/// that can happen (tests).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`] but returns `false` instead of panicking when a subscriber
/// is already installed.
pub fn try_setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .with_test_writer()
        .try_init()
        .is_ok()
}
