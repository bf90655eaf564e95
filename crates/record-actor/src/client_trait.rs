//! # StoreClient Trait
//!
//! Domain clients wrap a [`RecordClient`] and translate [`StoreError`] into their own
//! error type. Implementing `StoreClient` gives them `get`, `delete` and `list` for free.

use crate::{Record, RecordClient, StoreError};
use async_trait::async_trait;

/// Shared read/remove/filter surface for record-specific clients.
///
/// # Example
///
/// ```rust
/// use record_actor::{Record, RecordClient, StoreClient, StoreError};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Crate { id: u32, sealed: bool }
/// #[derive(Debug)] struct CrateCreate;
/// #[derive(Debug)] struct CrateUpdate;
/// #[derive(Debug)] enum CrateAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct CrateError(String);
///
/// #[async_trait]
/// impl Record for Crate {
///     type Id = u32; type Create = CrateCreate; type Update = CrateUpdate;
///     type Action = CrateAction; type ActionResult = (); type Context = (); type Error = CrateError;
///     fn from_create_params(id: u32, _: CrateCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, sealed: false })
///     }
///     async fn on_update(&mut self, _: CrateUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: CrateAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct CrateClient { inner: RecordClient<Crate> }
///
/// #[async_trait]
/// impl StoreClient<Crate> for CrateClient {
///     type Error = CrateError;
///     fn inner(&self) -> &RecordClient<Crate> { &self.inner }
///     fn map_error(e: StoreError) -> CrateError { CrateError(e.to_string()) }
/// }
///
/// async fn unsealed(client: &CrateClient) -> Result<Vec<Crate>, CrateError> {
///     client.list(|c: &Crate| !c.sealed).await
/// }
/// ```
#[async_trait]
pub trait StoreClient<T: Record>: Send + Sync {
    /// The record-specific error type.
    type Error: Send + Sync;

    fn inner(&self) -> &RecordClient<T>;

    /// Translates store failures into `Self::Error`.
    fn map_error(e: StoreError) -> Self::Error;

    /// Fetch a row by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Remove a row by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }

    /// Every row matching `filter`, in id order.
    #[tracing::instrument(skip_all)]
    async fn list<F>(&self, filter: F) -> Result<Vec<T>, Self::Error>
    where
        F: Fn(&T) -> bool + Send + 'static,
    {
        tracing::debug!("Sending request");
        self.inner().list(filter).await.map_err(Self::map_error)
    }
}
