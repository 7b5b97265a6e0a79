//! Order update workflow.

use std::sync::Arc;

use async_trait::async_trait;
use common::Context;
use decorator::{CommandHandler, MetricsSink, apply_command_decorators};
use domain::error::Result;
use domain::{Order, OrderError, OrderRepository, UpdateFn};

/// Request to apply a caller-supplied mutation to an existing order.
///
/// The mutation semantics belong entirely to the caller; no domain
/// validation happens at this layer.
pub struct UpdateOrder {
    pub order: Order,
    pub update_fn: UpdateFn,
}

impl std::fmt::Debug for UpdateOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateOrder")
            .field("order", &self.order)
            .finish_non_exhaustive()
    }
}

/// Builds the decorated update handler.
pub fn new_update_order_handler(
    repo: Arc<dyn OrderRepository>,
    sink: Arc<dyn MetricsSink>,
) -> Box<dyn CommandHandler<UpdateOrder, (), OrderError>> {
    apply_command_decorators(UpdateOrderHandler { repo }, sink)
}

struct UpdateOrderHandler {
    repo: Arc<dyn OrderRepository>,
}

#[async_trait]
impl CommandHandler<UpdateOrder, (), OrderError> for UpdateOrderHandler {
    async fn handle(&self, ctx: &Context, cmd: UpdateOrder) -> Result<()> {
        if ctx.is_cancelled() {
            return Err(OrderError::Cancelled);
        }
        self.repo.update(ctx, &cmd.order, cmd.update_fn).await
    }
}
