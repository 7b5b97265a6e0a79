//! Order service entry point.
//!
//! Composes the application over the in-memory adapters and drives one
//! order lifecycle to verify the wiring. Transport bindings attach to
//! `Application` outside this binary.

use std::sync::Arc;
use std::time::Duration;

use app::{
    Application, Config, CreateOrder, GetCustomerOrder, InMemoryInventory, InMemoryPublisher,
    UpdateOrder, telemetry,
};
use common::Context;
use decorator::{CommandHandler, PrometheusSink, QueryHandler};
use domain::{CustomerId, LineItem, OrderRepository};
use store::MemoryOrderRepository;

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    let telemetry = telemetry::init(&config);
    tracing::info!(service = %config.service_name, "starting");

    let repo: Arc<dyn OrderRepository> = Arc::new(MemoryOrderRepository::new());
    let inventory = Arc::new(InMemoryInventory::new());
    let publisher = Arc::new(InMemoryPublisher::new());
    let application = Application::new(
        repo,
        inventory,
        publisher.clone(),
        Arc::new(PrometheusSink),
    );

    let ctx = Context::with_timeout(Duration::from_secs(10));

    let created = application
        .commands
        .create_order
        .handle(
            &ctx,
            CreateOrder {
                customer_id: CustomerId::new("customer-1"),
                items: vec![
                    LineItem::new("sku-a", 2),
                    LineItem::new("sku-a", 3),
                    LineItem::new("sku-b", 1),
                ],
            },
        )
        .await
        .expect("order creation failed");
    tracing::info!(order_id = %created.order_id, "order created");

    let order = application
        .queries
        .get_customer_order
        .handle(
            &ctx,
            GetCustomerOrder {
                customer_id: CustomerId::new("customer-1"),
                order_id: created.order_id.clone(),
            },
        )
        .await
        .expect("order lookup failed");

    application
        .commands
        .update_order
        .handle(
            &ctx,
            UpdateOrder {
                order: order.clone(),
                update_fn: Box::new(|current| {
                    let mut next = current.clone();
                    next.status = "paid".to_string();
                    Ok(next)
                }),
            },
        )
        .await
        .expect("order update failed");

    tracing::info!(
        order_id = %order.id,
        published = publisher.published_count(),
        "lifecycle complete"
    );
    println!("{}", telemetry.render_metrics());
}
