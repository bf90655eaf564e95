//! # Record Trait
//!
//! The `Record` trait is the contract a row type implements to be owned by a
//! [`RecordActor`](crate::RecordActor). It names the id, the insert and patch payloads,
//! the custom actions, the injected context and the error type, and exposes the
//! lifecycle hooks the actor calls while it serves requests.
//!
//! Only `on_update` and `handle_action` are required. `on_create` and `on_delete`
//! default to doing nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// A row that can be held by a `RecordActor`.
///
/// # Ids
/// Ids are allocated by the actor from a `u32` counter starting at 1, so `Id`
/// must be constructible from `u32`. `Ord` keeps the store sorted, which makes
/// [`list`](crate::RecordClient::list) results come back in id order.
///
/// # Context
/// `Context` is handed to [`RecordActor::run`](crate::RecordActor::run) and then passed
/// by reference into every hook. Use `()` when the record needs nothing.
#[async_trait]
pub trait Record: Clone + Send + Sync + 'static {
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Insert payload.
    type Create: Send + Sync + Debug;

    /// Patch payload.
    type Update: Send + Sync + Debug;

    /// Record-specific operations beyond insert/read/patch/delete.
    type Action: Send + Sync + Debug;

    type ActionResult: Send + Sync + Debug;

    type Context: Send + Sync;

    /// One error enum for every hook of the record.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the row from its freshly allocated id and the insert payload.
    /// Called before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Runs after construction and before the row is stored. An error rejects the insert.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies a patch in place. An error leaves the request failed but the row is kept
    /// in whatever state the hook left it.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the row is removed. An error keeps the row.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
