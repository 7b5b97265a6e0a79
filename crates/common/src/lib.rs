//! Shared kernel for the order coordination services.
//!
//! This crate provides the types every other layer depends on:
//! - `OrderId` and the `IdGenerator` capability for assigning fresh ids
//! - `Context` carrying cancellation and deadline state across a request

pub mod context;
pub mod ids;

pub use context::Context;
pub use ids::{IdGenerator, OrderId, UuidGenerator};
