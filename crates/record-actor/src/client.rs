//! # Record Client
//!
//! The cloneable handle callers use to talk to a [`RecordActor`](crate::RecordActor).

use crate::error::StoreError;
use crate::message::{RecordRequest, Response};
use crate::record::Record;
use tokio::sync::{mpsc, oneshot};

/// Async handle to a record store.
///
/// Holds only the channel sender, so clones are cheap and can be moved into
/// other tasks. Dropping the last clone shuts the actor down.
pub struct RecordClient<T: Record> {
    sender: mpsc::Sender<RecordRequest<T>>,
}

impl<T: Record> Clone for RecordClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Record> RecordClient<T> {
    pub fn new(sender: mpsc::Sender<RecordRequest<T>>) -> Self {
        Self { sender }
    }

    /// Inserts a row and returns its allocated id.
    pub async fn create(&self, params: T::Create) -> Result<T::Id, StoreError> {
        self.request(|respond_to| RecordRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, StoreError> {
        self.request(|respond_to| RecordRequest::Get { id, respond_to })
            .await
    }

    /// Patches a row and returns it as stored after the patch.
    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, StoreError> {
        self.request(|respond_to| RecordRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), StoreError> {
        self.request(|respond_to| RecordRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, StoreError> {
        self.request(|respond_to| RecordRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }

    /// Returns clones of every row for which `filter` holds, in id order.
    pub async fn list<F>(&self, filter: F) -> Result<Vec<T>, StoreError>
    where
        F: Fn(&T) -> bool + Send + 'static,
    {
        let filter = Box::new(filter);
        self.request(|respond_to| RecordRequest::List { filter, respond_to })
            .await
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> RecordRequest<T>,
    ) -> Result<R, StoreError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| StoreError::ActorClosed)?;
        response.await.map_err(|_| StoreError::ActorDropped)?
    }
}
