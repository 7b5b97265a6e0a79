//! Application layer for the order coordination service.
//!
//! Hosts the command and query handlers, the ports they depend on
//! (inventory validation, event publication), and the `Application`
//! composition that wires everything through the decorator pipeline.

pub mod application;
pub mod command;
pub mod config;
pub mod query;
pub mod services;
pub mod telemetry;

pub use application::{Application, Commands, Queries};
pub use command::{
    CreateOrder, CreateOrderResult, UpdateOrder, new_create_order_handler,
    new_update_order_handler,
};
pub use config::Config;
pub use query::{GetCustomerOrder, new_get_customer_order_handler};
pub use services::inventory::{InMemoryInventory, InventoryService};
pub use services::publisher::{
    EventPublisher, InMemoryPublisher, ORDER_CREATED_QUEUE, OutboundMessage,
};
