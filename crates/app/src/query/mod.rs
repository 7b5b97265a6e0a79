//! Query handlers.

mod get_customer_order;

pub use get_customer_order::{GetCustomerOrder, new_get_customer_order_handler};
