use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use kirana_core::ItemId;

/// Shelf status relative to the target quantity.
///
/// Derived by whoever produces the item (seed data or an audit result);
/// downstream consumers trust it rather than re-deriving defensively.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    #[serde(rename = "Low Stock")]
    LowStock,
    #[serde(rename = "In Stock")]
    InStock,
    #[serde(rename = "Overstock")]
    Overstock,
}

impl StockStatus {
    /// Derive the status for a quantity against its target.
    pub fn for_levels(quantity: i64, target_quantity: i64) -> Self {
        if quantity < target_quantity {
            StockStatus::LowStock
        } else if quantity > target_quantity {
            StockStatus::Overstock
        } else {
            StockStatus::InStock
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::LowStock => "Low Stock",
            StockStatus::InStock => "In Stock",
            StockStatus::Overstock => "Overstock",
        }
    }
}

impl core::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the shelf-stock snapshot.
///
/// Lifecycle: seeded with a fixed starting set, replaced wholesale by audit
/// results, never incrementally patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub target_quantity: i64,
    pub status: StockStatus,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub anomalies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit_note: Option<String>,
}

impl InventoryItem {
    /// Create an item with its status derived from the given levels.
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        quantity: i64,
        target_quantity: i64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            target_quantity,
            status: StockStatus::for_levels(quantity, target_quantity),
            category: category.into(),
            expiry_date: None,
            anomalies: Vec::new(),
            audit_note: None,
        }
    }

    pub fn with_expiry(mut self, expiry_date: NaiveDate) -> Self {
        self.expiry_date = Some(expiry_date);
        self
    }

    pub fn with_anomalies(mut self, anomalies: Vec<String>) -> Self {
        self.anomalies = anomalies;
        self
    }

    pub fn with_audit_note(mut self, note: impl Into<String>) -> Self {
        self.audit_note = Some(note.into());
        self
    }
}

/// The fixed starting snapshot every session begins with.
pub fn seed_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(ItemId::from_u128(1), "Sona Masuri Rice", 4, 15, "Grain"),
        InventoryItem::new(ItemId::from_u128(2), "Premium Ghee (500ml)", 22, 10, "Dairy"),
        InventoryItem::new(ItemId::from_u128(3), "Sunflower Oil 5L", 12, 12, "Oil"),
        InventoryItem::new(ItemId::from_u128(4), "Atta 10kg Bag", 2, 8, "Flour"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_expected_statuses() {
        let seed = seed_inventory();
        assert_eq!(seed.len(), 4);

        let statuses: Vec<StockStatus> = seed.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![
                StockStatus::LowStock,
                StockStatus::Overstock,
                StockStatus::InStock,
                StockStatus::LowStock,
            ]
        );
    }

    #[test]
    fn status_serializes_with_display_labels() {
        let json = serde_json::to_string(&StockStatus::LowStock).unwrap();
        assert_eq!(json, "\"Low Stock\"");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn derived_status_is_consistent_with_levels(
                quantity in 0i64..10_000,
                target in 0i64..10_000,
            ) {
                let item = InventoryItem::new(
                    ItemId::from_u128(1),
                    "x",
                    quantity,
                    target,
                    "Test",
                );

                match item.status {
                    StockStatus::LowStock => prop_assert!(quantity < target),
                    StockStatus::InStock => prop_assert!(quantity == target),
                    StockStatus::Overstock => prop_assert!(quantity > target),
                }
            }
        }
    }
}
