//! Order creation workflow.

use std::sync::Arc;

use async_trait::async_trait;
use common::{Context, OrderId};
use decorator::{CommandHandler, MetricsSink, apply_command_decorators};
use domain::error::Result;
use domain::{CustomerId, LineItem, NewOrder, OrderError, OrderRepository, pack_items};

use crate::services::inventory::InventoryService;
use crate::services::publisher::{EventPublisher, ORDER_CREATED_QUEUE, OutboundMessage};

/// Request to create an order for a customer.
#[derive(Debug, Clone)]
pub struct CreateOrder {
    pub customer_id: CustomerId,
    pub items: Vec<LineItem>,
}

/// Identifier of the order the creation workflow produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrderResult {
    pub order_id: OrderId,
}

/// Builds the decorated creation handler.
pub fn new_create_order_handler(
    repo: Arc<dyn OrderRepository>,
    inventory: Arc<dyn InventoryService>,
    publisher: Arc<dyn EventPublisher>,
    sink: Arc<dyn MetricsSink>,
) -> Box<dyn CommandHandler<CreateOrder, CreateOrderResult, OrderError>> {
    apply_command_decorators(
        CreateOrderHandler {
            repo,
            inventory,
            publisher,
        },
        sink,
    )
}

struct CreateOrderHandler {
    repo: Arc<dyn OrderRepository>,
    inventory: Arc<dyn InventoryService>,
    publisher: Arc<dyn EventPublisher>,
}

#[async_trait]
impl CommandHandler<CreateOrder, CreateOrderResult, OrderError> for CreateOrderHandler {
    async fn handle(&self, ctx: &Context, cmd: CreateOrder) -> Result<CreateOrderResult> {
        if ctx.is_cancelled() {
            return Err(OrderError::Cancelled);
        }
        if cmd.items.is_empty() {
            return Err(OrderError::NoItems);
        }
        let requested = pack_items(cmd.items);

        let confirmed = self.inventory.check_availability(ctx, &requested).await?;
        if ctx.is_cancelled() {
            return Err(OrderError::Cancelled);
        }

        let stored = self
            .repo
            .create(ctx, NewOrder::new(cmd.customer_id, confirmed))
            .await?;
        if ctx.is_cancelled() {
            return Err(OrderError::Cancelled);
        }

        // The order is already persisted; a failure from here on surfaces to
        // the caller with no compensation.
        self.publisher.declare_queue(ORDER_CREATED_QUEUE).await?;
        let payload = serde_json::to_vec(&stored)?;
        self.publisher
            .publish(ctx, ORDER_CREATED_QUEUE, OutboundMessage::json(payload))
            .await?;

        Ok(CreateOrderResult {
            order_id: stored.id,
        })
    }
}
