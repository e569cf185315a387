//! Inventory domain module.
//!
//! This crate contains the shelf-stock read model shown on the dashboard,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod item;

pub use item::{InventoryItem, StockStatus, seed_inventory};
