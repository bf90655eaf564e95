//! # Store Requests
//!
//! Messages carried from a [`RecordClient`](crate::RecordClient) to its
//! [`RecordActor`](crate::RecordActor). Every request carries a oneshot sender the
//! actor answers on.

use crate::error::StoreError;
use crate::record::Record;
use std::fmt;
use tokio::sync::oneshot;

/// One-shot reply channel.
pub type Response<T> = oneshot::Sender<Result<T, StoreError>>;

/// Row predicate evaluated inside the actor task.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send>;

/// A request to the record store.
///
/// `Create`, `Get`, `Update` and `Delete` are insert/read/patch/remove by id.
/// `Action` runs a record-specific operation on one row. `List` returns every row
/// matching a predicate, in id order.
pub enum RecordRequest<T: Record> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    List {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
}

impl<T: Record> RecordRequest<T> {
    /// Short name used in logs and mock mismatch messages.
    pub fn kind(&self) -> &'static str {
        match self {
            RecordRequest::Create { .. } => "Create",
            RecordRequest::Get { .. } => "Get",
            RecordRequest::Update { .. } => "Update",
            RecordRequest::Delete { .. } => "Delete",
            RecordRequest::Action { .. } => "Action",
            RecordRequest::List { .. } => "List",
        }
    }
}

impl<T: Record> fmt::Debug for RecordRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordRequest::Create { params, .. } => {
                f.debug_struct("Create").field("params", params).finish()
            }
            RecordRequest::Get { id, .. } => f.debug_struct("Get").field("id", id).finish(),
            RecordRequest::Update { id, update, .. } => f
                .debug_struct("Update")
                .field("id", id)
                .field("update", update)
                .finish(),
            RecordRequest::Delete { id, .. } => f.debug_struct("Delete").field("id", id).finish(),
            RecordRequest::Action { id, action, .. } => f
                .debug_struct("Action")
                .field("id", id)
                .field("action", action)
                .finish(),
            RecordRequest::List { .. } => f.debug_struct("List").finish_non_exhaustive(),
        }
    }
}
