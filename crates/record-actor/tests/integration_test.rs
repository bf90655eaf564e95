use async_trait::async_trait;
use record_actor::{Record, RecordActor, StoreClient, RecordClient, StoreError};

// --- Test Record ---

#[derive(Clone, Debug, PartialEq)]
struct Shipment {
    id: u32,
    carrier: String,
    dispatched: bool,
}

#[derive(Debug)]
struct ShipmentCreate {
    carrier: String,
}

#[derive(Debug)]
struct ShipmentUpdate {
    carrier: Option<String>,
}

#[derive(Debug)]
enum ShipmentAction {
    Dispatch,
}

#[derive(Debug, thiserror::Error)]
enum ShipmentError {
    #[error("carrier must not be blank")]
    BlankCarrier,
    #[error("{0}")]
    Store(String),
}

#[async_trait]
impl Record for Shipment {
    type Id = u32;
    type Create = ShipmentCreate;
    type Update = ShipmentUpdate;
    type Action = ShipmentAction;
    type ActionResult = bool;
    type Context = ();
    type Error = ShipmentError;

    fn from_create_params(id: u32, params: ShipmentCreate) -> Result<Self, Self::Error> {
        if params.carrier.trim().is_empty() {
            return Err(ShipmentError::BlankCarrier);
        }
        Ok(Self {
            id,
            carrier: params.carrier,
            dispatched: false,
        })
    }

    async fn on_update(&mut self, update: ShipmentUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(carrier) = update.carrier {
            self.carrier = carrier;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ShipmentAction,
        _ctx: &(),
    ) -> Result<bool, Self::Error> {
        match action {
            ShipmentAction::Dispatch => {
                let changed = !self.dispatched;
                self.dispatched = true;
                Ok(changed)
            }
        }
    }
}

struct ShipmentClient {
    inner: RecordClient<Shipment>,
}

#[async_trait]
impl StoreClient<Shipment> for ShipmentClient {
    type Error = ShipmentError;

    fn inner(&self) -> &RecordClient<Shipment> {
        &self.inner
    }

    fn map_error(e: StoreError) -> ShipmentError {
        ShipmentError::Store(e.to_string())
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = RecordActor::<Shipment>::new(10);
    let handle = tokio::spawn(actor.run(()));

    // 1. Insert
    let id: u32 = client
        .create(ShipmentCreate {
            carrier: "DHL".into(),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    // 2. Action twice; the second is a no-op
    assert!(client.perform_action(id, ShipmentAction::Dispatch).await.unwrap());
    assert!(!client.perform_action(id, ShipmentAction::Dispatch).await.unwrap());

    // 3. Patch
    let patched = client
        .update(
            id,
            ShipmentUpdate {
                carrier: Some("UPS".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(patched.carrier, "UPS");
    assert!(patched.dispatched);

    // 4. Remove
    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_rejected_insert_surfaces_record_error() {
    let (actor, client) = RecordActor::<Shipment>::new(10);
    tokio::spawn(actor.run(()));

    let err = client
        .create(ShipmentCreate {
            carrier: "   ".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Record(_)));
    assert_eq!(err.to_string(), "Record error: carrier must not be blank");
}

#[tokio::test]
async fn test_store_client_list_filters() {
    let (actor, inner) = RecordActor::<Shipment>::new(10);
    tokio::spawn(actor.run(()));
    let client = ShipmentClient { inner };

    for carrier in ["DHL", "UPS", "DHL"] {
        client
            .inner()
            .create(ShipmentCreate {
                carrier: carrier.into(),
            })
            .await
            .unwrap();
    }

    let dhl = client
        .list(|s: &Shipment| s.carrier == "DHL")
        .await
        .unwrap();
    assert_eq!(dhl.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);

    client.delete(2).await.unwrap();
    assert!(client.get(2).await.unwrap().is_none());
}

#[tokio::test]
async fn test_closed_store_reports_actor_closed() {
    let (actor, client) = RecordActor::<Shipment>::new(1);
    drop(actor);

    let err = client.get(1).await.unwrap_err();
    assert!(matches!(err, StoreError::ActorClosed));
}
