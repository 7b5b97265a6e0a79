//! Application composition.

use std::sync::Arc;

use decorator::{CommandHandler, MetricsSink, QueryHandler};
use domain::{Order, OrderError, OrderRepository};

use crate::command::{
    CreateOrder, CreateOrderResult, UpdateOrder, new_create_order_handler,
    new_update_order_handler,
};
use crate::query::{GetCustomerOrder, new_get_customer_order_handler};
use crate::services::inventory::InventoryService;
use crate::services::publisher::EventPublisher;

/// The command surface exposed to transport adapters.
pub struct Commands {
    pub create_order: Box<dyn CommandHandler<CreateOrder, CreateOrderResult, OrderError>>,
    pub update_order: Box<dyn CommandHandler<UpdateOrder, (), OrderError>>,
}

/// The query surface exposed to transport adapters.
pub struct Queries {
    pub get_customer_order: Box<dyn QueryHandler<GetCustomerOrder, Order, OrderError>>,
}

/// The fully wired application.
///
/// Every handler leaves the factory already wrapped in the decorator
/// pipeline, so transports only ever see decorated instances. The actual
/// storage and upstream adapters are swapped here without touching handler
/// logic.
pub struct Application {
    pub commands: Commands,
    pub queries: Queries,
}

impl Application {
    /// Wires the handlers against the given adapters.
    pub fn new(
        repo: Arc<dyn OrderRepository>,
        inventory: Arc<dyn InventoryService>,
        publisher: Arc<dyn EventPublisher>,
        sink: Arc<dyn MetricsSink>,
    ) -> Self {
        Self {
            commands: Commands {
                create_order: new_create_order_handler(
                    repo.clone(),
                    inventory,
                    publisher,
                    sink.clone(),
                ),
                update_order: new_update_order_handler(repo.clone(), sink.clone()),
            },
            queries: Queries {
                get_customer_order: new_get_customer_order_handler(repo, sink),
            },
        }
    }
}
