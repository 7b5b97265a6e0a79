use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an order.
///
/// Opaque to callers; assigned by the repository at creation time and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    /// Creates an order ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the order ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the ID is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for OrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Capability for producing fresh order identifiers.
///
/// Injected into repository implementations so uniqueness never depends on
/// timestamp granularity.
pub trait IdGenerator: Send + Sync {
    /// Returns a new identifier, unique among concurrently generated ones.
    fn generate(&self) -> OrderId;
}

/// Default generator backed by random UUIDs (v4).
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> OrderId {
        OrderId::new(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_string_conversion() {
        let id = OrderId::new("order-1");
        assert_eq!(id.as_str(), "order-1");

        let id2: OrderId = "order-2".into();
        assert_eq!(id2.as_str(), "order-2");
    }

    #[test]
    fn order_id_serialization_roundtrip() {
        let id = OrderId::new("order-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"order-1\"");
        let deserialized: OrderId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn uuid_generator_creates_unique_ids() {
        let generator = UuidGenerator;
        let id1 = generator.generate();
        let id2 = generator.generate();
        assert_ne!(id1, id2);
        assert!(!id1.is_empty());
    }
}
