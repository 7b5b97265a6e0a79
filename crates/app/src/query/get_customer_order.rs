//! Customer-scoped order lookup.

use std::sync::Arc;

use async_trait::async_trait;
use common::{Context, OrderId};
use decorator::{MetricsSink, QueryHandler, apply_query_decorators};
use domain::error::Result;
use domain::{CustomerId, Order, OrderError, OrderRepository};

/// Request for one order scoped to its owning customer.
#[derive(Debug, Clone)]
pub struct GetCustomerOrder {
    pub customer_id: CustomerId,
    pub order_id: OrderId,
}

/// Builds the decorated lookup handler.
pub fn new_get_customer_order_handler(
    repo: Arc<dyn OrderRepository>,
    sink: Arc<dyn MetricsSink>,
) -> Box<dyn QueryHandler<GetCustomerOrder, Order, OrderError>> {
    apply_query_decorators(GetCustomerOrderHandler { repo }, sink)
}

struct GetCustomerOrderHandler {
    repo: Arc<dyn OrderRepository>,
}

#[async_trait]
impl QueryHandler<GetCustomerOrder, Order, OrderError> for GetCustomerOrderHandler {
    async fn handle(&self, ctx: &Context, query: GetCustomerOrder) -> Result<Order> {
        if ctx.is_cancelled() {
            return Err(OrderError::Cancelled);
        }

        let order = self
            .repo
            .get(ctx, &query.order_id, &query.customer_id)
            .await?;
        tracing::info!(order_id = %order.id, "customer order retrieved");
        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use decorator::NullSink;
    use domain::{LineItem, NewOrder};
    use store::MemoryOrderRepository;

    use super::*;

    #[tokio::test]
    async fn returns_the_order_for_its_owner() {
        let repo = Arc::new(MemoryOrderRepository::new());
        let handler = new_get_customer_order_handler(repo.clone(), Arc::new(NullSink));
        let ctx = Context::new();

        let stored = repo
            .create(
                &ctx,
                NewOrder::new(CustomerId::new("c1"), vec![LineItem::new("sku-a", 2)]),
            )
            .await
            .unwrap();

        let fetched = handler
            .handle(
                &ctx,
                GetCustomerOrder {
                    customer_id: CustomerId::new("c1"),
                    order_id: stored.id.clone(),
                },
            )
            .await
            .unwrap();

        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn missing_order_fails_not_found() {
        let repo = Arc::new(MemoryOrderRepository::new());
        let handler = new_get_customer_order_handler(repo, Arc::new(NullSink));

        let result = handler
            .handle(
                &Context::new(),
                GetCustomerOrder {
                    customer_id: CustomerId::new("c1"),
                    order_id: OrderId::new("missing-id"),
                },
            )
            .await;

        assert!(matches!(result, Err(OrderError::NotFound { .. })));
    }

    #[tokio::test]
    async fn other_customers_order_is_not_visible() {
        let repo = Arc::new(MemoryOrderRepository::new());
        let handler = new_get_customer_order_handler(repo.clone(), Arc::new(NullSink));
        let ctx = Context::new();

        let stored = repo
            .create(
                &ctx,
                NewOrder::new(CustomerId::new("c1"), vec![LineItem::new("sku-a", 2)]),
            )
            .await
            .unwrap();

        let result = handler
            .handle(
                &ctx,
                GetCustomerOrder {
                    customer_id: CustomerId::new("c2"),
                    order_id: stored.id,
                },
            )
            .await;

        assert!(matches!(result, Err(OrderError::NotFound { .. })));
    }
}
