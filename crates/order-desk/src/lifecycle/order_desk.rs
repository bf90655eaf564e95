use super::config::DeskConfig;
use crate::clients::OrderClient;
use tracing::{error, info};

/// Runtime for the order desk: owns the order book task and hands out its client.
///
/// # Example
///
/// ```ignore
/// let desk = OrderDesk::new(&DeskConfig::from_env()?);
///
/// let id = desk.order_client.create_order(order).await?;
/// let label = desk.order_client.instruction(id).await?;
///
/// desk.shutdown().await?;
/// ```
pub struct OrderDesk {
    pub order_client: OrderClient,

    /// Order book task, awaited on shutdown.
    handle: tokio::task::JoinHandle<()>,
}

impl OrderDesk {
    /// Spawns the order book. Must be called inside a Tokio runtime.
    pub fn new(config: &DeskConfig) -> Self {
        let (order_actor, store) = crate::order_actor::new(config.buffer_size);
        let handle = tokio::spawn(order_actor.run(()));
        info!(buffer_size = config.buffer_size, "Order desk started");

        Self {
            order_client: OrderClient::new(store),
            handle,
        }
    }

    /// Drops the client and waits for the order book to drain.
    ///
    /// Clones of `order_client` handed out earlier keep the book alive, so
    /// drop them before calling this.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order desk...");

        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Order book task failed: {:?}", e);
            return Err(format!("Order book task failed: {:?}", e));
        }

        info!("Order desk shutdown complete.");
        Ok(())
    }
}

impl Default for OrderDesk {
    fn default() -> Self {
        Self::new(&DeskConfig::default())
    }
}
