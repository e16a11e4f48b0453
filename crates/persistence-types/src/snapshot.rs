//! Character snapshot and inventory records.
//!
//! A [`CharacterSnapshot`] is a detached, point-in-time copy of a player's
//! character: the scalar vitals plus the ordered inventory. Snapshots
//! captured from the running game and snapshots read back from disk have
//! the same shape; only their origin differs.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ids::ItemInstanceId;

/// One stack of an in-world item held in an inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Item type name as the host knows it (e.g. `"Ore/Iron"`).
    pub item_type: String,

    /// Stack size. Fixed-point, matching the host's item amounts.
    pub quantity: Decimal,

    /// Instance id assigned by the owning inventory's counter.
    pub item_id: ItemInstanceId,
}

impl InventoryItem {
    /// Create an item record.
    pub fn new(item_type: impl Into<String>, quantity: Decimal, item_id: ItemInstanceId) -> Self {
        Self {
            item_type: item_type.into(),
            quantity,
            item_id,
        }
    }

    /// Copy of this item carrying a different instance id.
    #[must_use]
    pub fn with_item_id(&self, item_id: ItemInstanceId) -> Self {
        Self {
            item_type: self.item_type.clone(),
            quantity: self.quantity,
            item_id,
        }
    }
}

/// Point-in-time state of one player's character.
///
/// Ancillary toggles (lights, jetpack, dampeners) are intentionally not
/// part of the snapshot and are never carried across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterSnapshot {
    /// Display name of the character.
    pub name: String,

    /// Current health.
    pub health: f32,

    /// Current suit battery level.
    pub battery_level: f32,

    /// Inventory contents in host enumeration order.
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
}

impl CharacterSnapshot {
    /// Create a snapshot with an empty inventory.
    pub fn new(name: impl Into<String>, health: f32, battery_level: f32) -> Self {
        Self {
            name: name.into(),
            health,
            battery_level,
            inventory: Vec::new(),
        }
    }

    /// Append an item to the inventory, builder style.
    #[must_use]
    pub fn with_item(mut self, item: InventoryItem) -> Self {
        self.inventory.push(item);
        self
    }

    /// Ordered `(item type, quantity)` pairs, ignoring instance ids.
    ///
    /// Instance ids are reassigned by the host whenever items are
    /// recreated, so two inventories holding the same goods compare equal
    /// through this view even when their ids differ.
    pub fn contents(&self) -> Vec<(&str, Decimal)> {
        self.inventory
            .iter()
            .map(|item| (item.item_type.as_str(), item.quantity))
            .collect()
    }
}
