//! Line items and request normalization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Product identifier (SKU).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new product ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A product and the quantity requested or confirmed for it.
///
/// Two items with the same id in one request are semantically one item with
/// the summed quantity; `pack_items` performs that merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ProductId,
    pub quantity: u32,
}

impl LineItem {
    /// Creates a new line item.
    pub fn new(id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            id: id.into(),
            quantity,
        }
    }
}

/// Merges items sharing an identifier by summing their quantities.
///
/// The result carries one entry per distinct id; output order is
/// unspecified. Packing an already-packed list leaves the multiset of
/// `(id, quantity)` pairs unchanged.
pub fn pack_items(items: Vec<LineItem>) -> Vec<LineItem> {
    let mut merged: HashMap<ProductId, u32> = HashMap::new();
    for item in items {
        *merged.entry(item.id).or_insert(0) += item.quantity;
    }
    merged
        .into_iter()
        .map(|(id, quantity)| LineItem { id, quantity })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut items: Vec<LineItem>) -> Vec<LineItem> {
        items.sort_by(|a, b| a.id.cmp(&b.id));
        items
    }

    #[test]
    fn product_id_string_conversion() {
        let id = ProductId::new("sku-a");
        assert_eq!(id.as_str(), "sku-a");

        let id2: ProductId = "sku-b".into();
        assert_eq!(id2.as_str(), "sku-b");
    }

    #[test]
    fn pack_merges_duplicates_by_summing() {
        let packed = pack_items(vec![
            LineItem::new("sku-a", 2),
            LineItem::new("sku-a", 3),
            LineItem::new("sku-b", 1),
        ]);

        assert_eq!(
            sorted(packed),
            vec![LineItem::new("sku-a", 5), LineItem::new("sku-b", 1)]
        );
    }

    #[test]
    fn pack_is_idempotent() {
        let once = pack_items(vec![
            LineItem::new("sku-a", 2),
            LineItem::new("sku-b", 4),
            LineItem::new("sku-a", 1),
        ]);
        let twice = pack_items(once.clone());

        assert_eq!(sorted(once), sorted(twice));
    }

    #[test]
    fn pack_keeps_distinct_items() {
        let packed = pack_items(vec![
            LineItem::new("sku-a", 1),
            LineItem::new("sku-b", 2),
            LineItem::new("sku-c", 3),
        ]);
        assert_eq!(packed.len(), 3);
    }

    #[test]
    fn pack_of_empty_is_empty() {
        assert!(pack_items(vec![]).is_empty());
    }

    #[test]
    fn pack_preserves_zero_quantities() {
        let packed = pack_items(vec![LineItem::new("sku-a", 0)]);
        assert_eq!(packed, vec![LineItem::new("sku-a", 0)]);
    }

    #[test]
    fn line_item_serialization_roundtrip() {
        let item = LineItem::new("sku-a", 2);
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"sku-a","quantity":2}"#);
        let deserialized: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item, deserialized);
    }
}
