use std::sync::Arc;

use async_trait::async_trait;
use common::{Context, IdGenerator, OrderId, UuidGenerator};
use domain::error::Result;
use domain::{CustomerId, NewOrder, Order, OrderError, OrderRepository, UpdateFn};
use tokio::sync::RwLock;

/// In-memory order repository.
///
/// A single reader-writer lock protects the backing collection: `get` runs
/// under the shared lock and may proceed concurrently with other `get`s,
/// while `create` and `update` take the exclusive lock and are serialized
/// against every other operation. That total ordering of writes is what
/// prevents lost updates without exposing a load-then-save round trip.
#[derive(Clone)]
pub struct MemoryOrderRepository {
    orders: Arc<RwLock<Vec<Order>>>,
    ids: Arc<dyn IdGenerator>,
}

impl MemoryOrderRepository {
    /// Creates an empty repository with UUID-based id assignment.
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidGenerator))
    }

    /// Creates an empty repository with a caller-supplied id generator.
    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            orders: Arc::new(RwLock::new(Vec::new())),
            ids,
        }
    }

    /// Returns the number of stored orders.
    pub async fn order_count(&self) -> usize {
        self.orders.read().await.len()
    }
}

impl Default for MemoryOrderRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn create(&self, ctx: &Context, order: NewOrder) -> Result<Order> {
        if ctx.is_cancelled() {
            return Err(OrderError::Cancelled);
        }

        let mut orders = self.orders.write().await;
        let stored = Order {
            id: self.ids.generate(),
            customer_id: order.customer_id,
            status: order.status,
            payment_link: order.payment_link,
            items: order.items,
        };
        orders.push(stored.clone());

        tracing::debug!(order_id = %stored.id, customer_id = %stored.customer_id, "order stored");
        Ok(stored)
    }

    async fn get(&self, ctx: &Context, id: &OrderId, customer_id: &CustomerId) -> Result<Order> {
        if ctx.is_cancelled() {
            return Err(OrderError::Cancelled);
        }

        let orders = self.orders.read().await;
        orders
            .iter()
            .find(|o| o.id == *id && o.customer_id == *customer_id)
            .cloned()
            .ok_or_else(|| OrderError::NotFound {
                order_id: id.clone(),
            })
    }

    async fn update(&self, ctx: &Context, order: &Order, update_fn: UpdateFn) -> Result<()> {
        if ctx.is_cancelled() {
            return Err(OrderError::Cancelled);
        }

        let mut orders = self.orders.write().await;
        let Some(stored) = orders
            .iter_mut()
            .find(|o| o.id == order.id && o.customer_id == order.customer_id)
        else {
            return Err(OrderError::NotFound {
                order_id: order.id.clone(),
            });
        };

        let updated = update_fn(stored)?;
        *stored = updated;

        tracing::debug!(order_id = %order.id, "order updated");
        Ok(())
    }
}
