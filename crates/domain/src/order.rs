//! The order aggregate and its value objects.

use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::items::LineItem;

/// Identifier of the customer owning an order.
///
/// Combined with the order id it forms the lookup key for all
/// customer-scoped access.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    /// Creates a new customer ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the customer ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CustomerId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CustomerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for CustomerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One customer purchase.
///
/// Stored orders always carry a non-empty `id` and `customer_id`, and their
/// item ids are unique (creation normalizes the request first). `status` is
/// free-form at this layer; transitions are caller-supplied through the
/// update workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub status: String,
    pub payment_link: String,
    pub items: Vec<LineItem>,
}

/// Input shape for order creation, before the repository assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    pub customer_id: CustomerId,
    pub status: String,
    pub payment_link: String,
    pub items: Vec<LineItem>,
}

impl NewOrder {
    /// Creates a draft order for a customer with confirmed items.
    pub fn new(customer_id: CustomerId, items: Vec<LineItem>) -> Self {
        Self {
            customer_id,
            status: String::new(),
            payment_link: String::new(),
            items,
        }
    }
}
