//! # Mock Store
//!
//! `MockStore<T>` hands out a real [`RecordClient<T>`] whose requests are answered
//! from a queue of scripted expectations instead of a `RecordActor`. Use it to test
//! the logic wrapped around a client, and to inject failures such as a closed
//! actor that are awkward to provoke with a live store.
//!
//! | | MockStore | RecordActor |
//! |---|---|---|
//! | **State** | none, answers are scripted | real rows |
//! | **Error injection** | `return_err` | needs a crafted record |
//! | **Use case** | client wrappers | the record hooks themselves |
//!
//! Expectations are consumed in the order they were queued. A request that does
//! not match the next expectation (wrong kind, or wrong id) panics the mock task,
//! which drops the reply channel and surfaces as [`StoreError::ActorDropped`] to the
//! caller. Call [`MockStore::verify`] at the end of a test to assert the queue drained.
//!
//! ```rust
//! use record_actor::mock::MockStore;
//! use record_actor::{Record, StoreError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Label { id: u32 }
//! #[derive(Debug)] struct LabelCreate;
//! #[derive(Debug)] struct LabelUpdate;
//! #[derive(Debug)] enum LabelAction {}
//! #[derive(Debug, thiserror::Error)] #[error("label")] struct LabelError;
//!
//! #[async_trait]
//! impl Record for Label {
//!     type Id = u32; type Create = LabelCreate; type Update = LabelUpdate;
//!     type Action = LabelAction; type ActionResult = (); type Context = (); type Error = LabelError;
//!     fn from_create_params(id: u32, _: LabelCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: LabelUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: LabelAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockStore::<Label>::new();
//!     mock.expect_get(1).return_err(StoreError::ActorClosed);
//!
//!     let result = mock.client().get(1).await;
//!     assert!(matches!(result, Err(StoreError::ActorClosed)));
//!     mock.verify();
//! }
//! ```

use crate::client::RecordClient;
use crate::error::StoreError;
use crate::message::RecordRequest;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

/// A scripted answer to one request.
enum Expectation<T: Record> {
    Get {
        id: T::Id,
        response: Result<Option<T>, StoreError>,
    },
    Create {
        response: Result<T::Id, StoreError>,
    },
    Update {
        id: T::Id,
        response: Result<T, StoreError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), StoreError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, StoreError>,
    },
    List {
        response: Result<Vec<T>, StoreError>,
    },
}

impl<T: Record> Expectation<T> {
    fn kind(&self) -> &'static str {
        match self {
            Expectation::Get { .. } => "Get",
            Expectation::Create { .. } => "Create",
            Expectation::Update { .. } => "Update",
            Expectation::Delete { .. } => "Delete",
            Expectation::Action { .. } => "Action",
            Expectation::List { .. } => "List",
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A record client backed by scripted expectations.
pub struct MockStore<T: Record> {
    client: RecordClient<T>,
    expectations: Queue<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Record> Default for MockStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> MockStore<T> {
    /// Spawns the answering task. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<RecordRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();
                answer(request, expectation);
            }
        });

        Self {
            client: RecordClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    pub fn client(&self) -> RecordClient<T> {
        self.client.clone()
    }

    pub fn expect_get(&mut self, id: T::Id) -> Expect<T, Option<T>> {
        self.expect(move |response| Expectation::Get { id, response })
    }

    pub fn expect_create(&mut self) -> Expect<T, T::Id> {
        self.expect(|response| Expectation::Create { response })
    }

    pub fn expect_update(&mut self, id: T::Id) -> Expect<T, T> {
        self.expect(move |response| Expectation::Update { id, response })
    }

    pub fn expect_delete(&mut self, id: T::Id) -> Expect<T, ()> {
        self.expect(move |response| Expectation::Delete { id, response })
    }

    pub fn expect_action(&mut self, id: T::Id) -> Expect<T, T::ActionResult> {
        self.expect(move |response| Expectation::Action { id, response })
    }

    /// Expects a `list`; the filter sent by the caller is not applied to the scripted rows.
    pub fn expect_list(&mut self) -> Expect<T, Vec<T>> {
        self.expect(|response| Expectation::List { response })
    }

    /// Panics unless every queued expectation was consumed.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap();
        if !remaining.is_empty() {
            let kinds: Vec<&str> = remaining.iter().map(Expectation::kind).collect();
            panic!("Not all expectations were met: {kinds:?} remaining");
        }
    }

    fn expect<R>(
        &mut self,
        build: impl FnOnce(Result<R, StoreError>) -> Expectation<T> + Send + 'static,
    ) -> Expect<T, R> {
        Expect {
            build: Box::new(build),
            expectations: self.expectations.clone(),
        }
    }
}

/// Pending expectation; finish it with `return_ok` or `return_err`.
#[must_use = "an expectation is only queued once return_ok or return_err is called"]
pub struct Expect<T: Record, R> {
    build: Box<dyn FnOnce(Result<R, StoreError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: Record, R> Expect<T, R> {
    pub fn return_ok(self, value: R) {
        self.push(Ok(value));
    }

    pub fn return_err(self, error: StoreError) {
        self.push(Err(error));
    }

    fn push(self, response: Result<R, StoreError>) {
        let expectation = (self.build)(response);
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

fn answer<T: Record>(request: RecordRequest<T>, expectation: Option<Expectation<T>>) {
    match (request, expectation) {
        (RecordRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response })) => {
            assert_eq!(id, want, "Get for unexpected id");
            let _ = respond_to.send(response);
        }
        (RecordRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
            let _ = respond_to.send(response);
        }
        (
            RecordRequest::Update { id, respond_to, .. },
            Some(Expectation::Update { id: want, response }),
        ) => {
            assert_eq!(id, want, "Update for unexpected id");
            let _ = respond_to.send(response);
        }
        (
            RecordRequest::Delete { id, respond_to },
            Some(Expectation::Delete { id: want, response }),
        ) => {
            assert_eq!(id, want, "Delete for unexpected id");
            let _ = respond_to.send(response);
        }
        (
            RecordRequest::Action { id, respond_to, .. },
            Some(Expectation::Action { id: want, response }),
        ) => {
            assert_eq!(id, want, "Action for unexpected id");
            let _ = respond_to.send(response);
        }
        (RecordRequest::List { respond_to, .. }, Some(Expectation::List { response })) => {
            let _ = respond_to.send(response);
        }
        (request, expectation) => panic!(
            "Unexpected {} request, expected {}",
            request.kind(),
            expectation.as_ref().map_or("nothing", Expectation::kind)
        ),
    }
}
