//! Order domain for the order coordination services.
//!
//! This crate provides:
//! - The `Order` aggregate and its value objects
//! - Item normalization (`pack_items`)
//! - The `OrderRepository` contract with its mutation-function update
//! - The `OrderError` taxonomy shared by all order operations

pub mod error;
pub mod items;
pub mod order;
pub mod repository;

pub use error::OrderError;
pub use items::{LineItem, ProductId, pack_items};
pub use order::{CustomerId, NewOrder, Order};
pub use repository::{OrderRepository, UpdateFn};
