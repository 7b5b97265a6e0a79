//! Command handlers.

mod create_order;
mod update_order;

pub use create_order::{CreateOrder, CreateOrderResult, new_create_order_handler};
pub use update_order::{UpdateOrder, new_update_order_handler};
