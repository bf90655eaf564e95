//! # Order Desk demo
//!
//! Walks a handful of orders through payment, labelling and delivery and logs
//! the instruction staff would see at each step.
//!
//! ```bash
//! RUST_LOG=info cargo run -p order-desk
//! ORDER_DESK_BUFFER=8 RUST_LOG=debug cargo run -p order-desk
//! ```

use order_desk::instruction::InstructionLabel;
use order_desk::lifecycle::{setup_tracing, DeskConfig, OrderDesk};
use order_desk::model::{Order, OrderCreate};
use tracing::{error, info, Instrument};

/// Rows as they arrive from the storefront export.
const SEED_ORDERS: &str = r#"[
    {"paid": true, "stripe_customer_id": "cus_1"},
    {"paid": true, "stripe_customer_id": "cus_2",
     "tracking_link": "https://carrier.example/t/2", "shipping_id": "SHIP-2",
     "delivery_status": "Ready to send"},
    {"paid": true, "stripe_customer_id": "cus_3",
     "tracking_link": "https://carrier.example/t/3", "shipping_id": "SHIP-3",
     "delivery_status": "In transit"},
    {"paid": false, "tracking_link": "https://carrier.example/t/4"},
    {"tracking_link": "https://carrier.example/t/5", "shipping_id": "SHIP-5"}
]"#;

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = DeskConfig::from_env().map_err(|e| e.to_string())?;
    info!(buffer_size = config.buffer_size, "Starting order desk demo");

    let desk = OrderDesk::new(&config);
    let client = &desk.order_client;

    let rows: Vec<Order> = serde_json::from_str(SEED_ORDERS).map_err(|e| e.to_string())?;

    let span = tracing::info_span!("intake");
    let ids = async {
        let mut ids = Vec::with_capacity(rows.len());
        for row in rows {
            let id = client
                .create_order(OrderCreate::from(row))
                .await
                .map_err(|e| e.to_string())?;
            ids.push(id);
        }
        Ok::<_, String>(ids)
    }
    .instrument(span)
    .await?;

    for id in &ids {
        let label = client.instruction(*id).await.map_err(|e| e.to_string())?;
        let status = client.display_status(*id).await.map_err(|e| e.to_string())?;
        info!(order_id = %id, instruction = %label, display_status = %status, "Order evaluated");
    }

    // The first order gets its label, then the carrier picks it up and delivers.
    let first = *ids.first().ok_or_else(|| "no orders seeded".to_string())?;
    let span = tracing::info_span!("fulfilment", order_id = %first);
    let fulfilment = async {
        client
            .record_tracking(first, "https://carrier.example/t/1", "SHIP-1")
            .await?;
        client.record_delivery_status(first, "Ready to send").await?;
        client.record_delivery_status(first, "In transit").await?;
        client.record_delivery_status(first, "Delivered").await
    }
    .instrument(span)
    .await;

    match fulfilment {
        Ok(order) => info!(
            order_id = %order.id,
            instruction = ?order.instruction,
            "Fulfilment recorded"
        ),
        Err(e) => error!(error = %e, "Fulfilment failed"),
    }

    let to_ship = client
        .orders_with_instruction(InstructionLabel::ToShip)
        .await
        .map_err(|e| e.to_string())?;
    info!(count = to_ship.len(), "Orders waiting to be shipped");

    let summary = client
        .instruction_summary()
        .await
        .map_err(|e| e.to_string())?;
    let badges = serde_json::to_string(&summary).map_err(|e| e.to_string())?;
    info!(total = summary.total(), %badges, "Instruction summary");

    desk.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
