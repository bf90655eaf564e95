//! # Record Actor
//!
//! The server half of the store. A `RecordActor<T>` owns every row of type `T` and
//! serves requests one at a time from its channel, so each request sees a
//! consistent snapshot of the rows and no lock guards the map.

use crate::client::RecordClient;
use crate::error::StoreError;
use crate::message::{Filter, RecordRequest, Response};
use crate::record::Record;
use std::collections::BTreeMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Owns the rows of one record type and serves [`RecordRequest`]s.
///
/// # Usage Pattern
///
/// 1. **Create**: `RecordActor::new(buffer)` returns the actor and its client.
/// 2. **Wire**: pass the record's context into `actor.run(context)`.
/// 3. **Run**: spawn the returned future on the Tokio runtime.
///
/// ```rust
/// use record_actor::{Record, RecordActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, text: String }
/// #[derive(Debug)] struct NoteCreate(String);
/// #[derive(Debug)] struct NoteUpdate(String);
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl Record for Note {
///     type Id = u32;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, text: p.0 })
///     }
///     async fn on_update(&mut self, u: NoteUpdate, _: &()) -> Result<(), Self::Error> {
///         self.text = u.0;
///         Ok(())
///     }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = RecordActor::<Note>::new(8);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(NoteCreate("ship it".into())).await.unwrap();
///     let long = client.list(|n: &Note| n.text.len() > 3).await.unwrap();
///     assert_eq!(long.len(), 1);
///     assert_eq!(long[0].id, id);
/// }
/// ```
pub struct RecordActor<T: Record> {
    receiver: mpsc::Receiver<RecordRequest<T>>,
    store: BTreeMap<T::Id, T>,
    next_id: u32,
}

impl<T: Record> RecordActor<T> {
    /// Creates the actor and a client bound to it.
    ///
    /// `buffer_size` is the channel capacity; when it is full, client calls wait
    /// for room.
    pub fn new(buffer_size: usize) -> (Self, RecordClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: BTreeMap::new(),
            next_id: 1,
        };
        (actor, RecordClient::new(sender))
    }

    /// Serves requests until every client has been dropped.
    ///
    /// `context` is borrowed by every hook call for the lifetime of the loop.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Record actor started");

        while let Some(request) = self.receiver.recv().await {
            match request {
                RecordRequest::Create { params, respond_to } => {
                    self.create(params, respond_to, &context).await
                }
                RecordRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                RecordRequest::Update {
                    id,
                    update,
                    respond_to,
                } => self.update(id, update, respond_to, &context).await,
                RecordRequest::Delete { id, respond_to } => {
                    self.delete(id, respond_to, &context).await
                }
                RecordRequest::Action {
                    id,
                    action,
                    respond_to,
                } => self.action(id, action, respond_to, &context).await,
                RecordRequest::List { filter, respond_to } => self.list(filter, respond_to),
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(&mut self, params: T::Create, respond_to: Response<T::Id>, ctx: &T::Context) {
        let entity_type = entity_type::<T>();
        debug!(entity_type, ?params, "Create");
        let Some(following) = self.next_id.checked_add(1) else {
            warn!(entity_type, "Id space exhausted");
            let _ = respond_to.send(Err(StoreError::IdsExhausted));
            return;
        };
        let id = T::Id::from(self.next_id);
        self.next_id = following;

        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Create failed");
                let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
                return;
            }
        };
        if let Err(e) = item.on_create(ctx).await {
            warn!(entity_type, error = %e, "on_create failed");
            let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
            return;
        }
        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        let _ = respond_to.send(Ok(id));
    }

    async fn update(
        &mut self,
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
        ctx: &T::Context,
    ) {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?update, "Update");
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
            return;
        };
        match item.on_update(update, ctx).await {
            Ok(()) => {
                info!(entity_type, %id, "Updated");
                let _ = respond_to.send(Ok(item.clone()));
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Update failed");
                let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
            }
        }
    }

    async fn delete(&mut self, id: T::Id, respond_to: Response<()>, ctx: &T::Context) {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, "Delete");
        let Some(item) = self.store.get(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
            return;
        };
        if let Err(e) = item.on_delete(ctx).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            let _ = respond_to.send(Err(StoreError::Record(Box::new(e))));
            return;
        }
        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        let _ = respond_to.send(Ok(()));
    }

    async fn action(
        &mut self,
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
        ctx: &T::Context,
    ) {
        let entity_type = entity_type::<T>();
        debug!(entity_type, %id, ?action, "Action");
        let Some(item) = self.store.get_mut(&id) else {
            warn!(entity_type, %id, "Not found");
            let _ = respond_to.send(Err(StoreError::NotFound(id.to_string())));
            return;
        };
        let result = item
            .handle_action(action, ctx)
            .await
            .map_err(|e| StoreError::Record(Box::new(e)));
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        let _ = respond_to.send(result);
    }

    fn list(&self, filter: Filter<T>, respond_to: Response<Vec<T>>) {
        let rows: Vec<T> = self
            .store
            .values()
            .filter(|row| filter(*row))
            .cloned()
            .collect();
        debug!(
            entity_type = entity_type::<T>(),
            matched = rows.len(),
            size = self.store.len(),
            "List"
        );
        let _ = respond_to.send(Ok(rows));
    }
}

/// Last path segment of the record's type name, e.g. `Order`.
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .rsplit("::")
        .next()
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Parcel {
        id: u32,
        weight: u32,
    }

    #[derive(Debug)]
    struct ParcelCreate(u32);

    #[derive(Debug)]
    struct ParcelUpdate(u32);

    #[derive(Debug)]
    enum ParcelAction {
        Weight,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("parcel rejected: {0}")]
    struct ParcelError(String);

    #[async_trait]
    impl Record for Parcel {
        type Id = u32;
        type Create = ParcelCreate;
        type Update = ParcelUpdate;
        type Action = ParcelAction;
        type ActionResult = u32;
        type Context = u32;
        type Error = ParcelError;

        fn from_create_params(id: u32, params: ParcelCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                weight: params.0,
            })
        }

        async fn on_create(&mut self, max_weight: &u32) -> Result<(), Self::Error> {
            if self.weight > *max_weight {
                return Err(ParcelError(format!("{} over limit", self.weight)));
            }
            Ok(())
        }

        async fn on_update(&mut self, update: ParcelUpdate, _: &u32) -> Result<(), Self::Error> {
            self.weight = update.0;
            Ok(())
        }

        async fn handle_action(&mut self, action: ParcelAction, _: &u32) -> Result<u32, Self::Error> {
            match action {
                ParcelAction::Weight => Ok(self.weight),
            }
        }
    }

    #[tokio::test]
    async fn rejected_create_does_not_consume_a_row() {
        let (actor, client) = RecordActor::<Parcel>::new(4);
        tokio::spawn(actor.run(10));

        let err = client.create(ParcelCreate(50)).await.unwrap_err();
        assert!(matches!(err, StoreError::Record(_)));
        assert!(err.to_string().contains("over limit"));

        let all = client.list(|_: &Parcel| true).await.unwrap();
        assert!(all.is_empty());
    }

    #[tokio::test]
    async fn list_returns_rows_in_id_order() {
        let (actor, client) = RecordActor::<Parcel>::new(4);
        tokio::spawn(actor.run(100));

        for weight in [30, 5, 20, 1] {
            client.create(ParcelCreate(weight)).await.unwrap();
        }

        let heavy = client.list(|p: &Parcel| p.weight >= 5).await.unwrap();
        let ids: Vec<u32> = heavy.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let (actor, client) = RecordActor::<Parcel>::new(4);
        tokio::spawn(actor.run(100));

        assert!(client.get(9).await.unwrap().is_none());
        assert!(client.update(9, ParcelUpdate(1)).await.unwrap_err().is_not_found());
        assert!(client.delete(9).await.unwrap_err().is_not_found());
        assert!(client
            .perform_action(9, ParcelAction::Weight)
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn create_fails_once_ids_run_out() {
        let (mut actor, client) = RecordActor::<Parcel>::new(4);
        actor.next_id = u32::MAX - 1;
        tokio::spawn(actor.run(100));

        assert_eq!(client.create(ParcelCreate(1)).await.unwrap(), u32::MAX - 1);
        let err = client.create(ParcelCreate(2)).await.unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted));

        // The store keeps serving everything else.
        let all = client.list(|_: &Parcel| true).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(client.perform_action(u32::MAX - 1, ParcelAction::Weight).await.unwrap(), 1);
    }

    #[test]
    fn entity_type_is_last_path_segment() {
        assert_eq!(entity_type::<Parcel>(), "Parcel");
    }
}
