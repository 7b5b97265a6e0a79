//! Order error taxonomy.

use common::OrderId;
use thiserror::Error;

/// Errors that can occur during order operations.
///
/// Handlers propagate these verbatim; decorators observe but never suppress
/// or rewrite them. Mapping to transport status codes happens outside this
/// core.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Creation was requested with an empty item list.
    #[error("order must contain at least one item")]
    NoItems,

    /// No order matches the given id/customer pair.
    #[error("order not found: {order_id}")]
    NotFound { order_id: OrderId },

    /// Inventory confirmation or event publication failed.
    #[error("upstream failure: {0}")]
    Upstream(String),

    /// The controlling context was cancelled or its deadline passed.
    #[error("operation cancelled")]
    Cancelled,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for order operations.
pub type Result<T> = std::result::Result<T, OrderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_order() {
        let err = OrderError::NotFound {
            order_id: OrderId::new("order-9"),
        };
        assert_eq!(err.to_string(), "order not found: order-9");
    }
}
