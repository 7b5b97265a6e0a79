//! Repository contract for order persistence.

use async_trait::async_trait;
use common::{Context, OrderId};

use crate::error::Result;
use crate::order::{CustomerId, NewOrder, Order};

/// Mutation applied to a stored order inside [`OrderRepository::update`].
///
/// Receives the currently stored record and returns its replacement. A
/// failing mutation aborts the update with the store unchanged.
pub type UpdateFn = Box<dyn FnOnce(&Order) -> Result<Order> + Send>;

/// Sole authority for order persistence.
///
/// Every adapter must honor the same invariants and failure semantics:
/// lookups are scoped by the owning customer (an id alone never crosses that
/// boundary), update never creates a record, and assigned ids are unique
/// among concurrently created orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Assigns a fresh identifier, stores a copy of the input under it, and
    /// returns the stored order.
    async fn create(&self, ctx: &Context, order: NewOrder) -> Result<Order>;

    /// Returns the unique order matching both the id and the owning
    /// customer, or [`OrderError::NotFound`](crate::OrderError::NotFound).
    async fn get(&self, ctx: &Context, id: &OrderId, customer_id: &CustomerId) -> Result<Order>;

    /// Replaces the record matching `(order.id, order.customer_id)` with the
    /// result of `update_fn`, invoked exactly once on the stored value. The
    /// swap is atomic with respect to all other repository operations.
    async fn update(&self, ctx: &Context, order: &Order, update_fn: UpdateFn) -> Result<()>;
}
