//! Capability traits for the host game's live objects.
//!
//! The host owns characters and inventories; this crate only reads and
//! mutates them through the narrow surface below. Implementations wrap
//! whatever handle the engine exposes. Mutation through these traits is
//! immediately visible in the running game.

use std::sync::{Arc, Mutex};

use persistence_types::{CharacterSnapshot, InventoryItem, ItemInstanceId, PlayerId};

/// A live character shared between the host and this crate.
pub type SharedCharacter<C> = Arc<Mutex<C>>;

/// Failures reported by the host when mutating a live inventory.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    /// The host would not accept the item (unknown type, no room, ...).
    #[error("item {item_type} rejected: {reason}")]
    ItemRejected {
        /// Item type that was refused.
        item_type: String,
        /// Host-supplied explanation.
        reason: String,
    },

    /// No item with this instance id is in the inventory.
    #[error("item {0} not found in inventory")]
    ItemMissing(ItemInstanceId),
}

/// The inventory attached to a live character.
pub trait LiveInventory {
    /// Bring the inventory in sync with the simulation before mutation.
    fn refresh(&mut self);

    /// Current items in host enumeration order.
    fn items(&self) -> Vec<InventoryItem>;

    /// Insert one item stack.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the host refuses the item.
    fn add_item(&mut self, item: InventoryItem) -> Result<(), HostError>;

    /// Remove the item stack with the given instance id.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the item is absent or cannot be removed.
    fn remove_item(&mut self, item_id: ItemInstanceId) -> Result<(), HostError>;

    /// The instance id the next inserted item will receive.
    fn next_item_id(&self) -> ItemInstanceId;

    /// Overwrite the monotonic instance id counter.
    fn set_next_item_id(&mut self, next: ItemInstanceId);
}

/// A character object currently alive in the host simulation.
pub trait LiveCharacter {
    /// Concrete inventory handle type.
    type Inventory: LiveInventory;

    /// The player controlling this character.
    fn player_id(&self) -> PlayerId;

    /// Display name.
    fn name(&self) -> &str;

    /// Current health.
    fn health(&self) -> f32;

    /// Overwrite health.
    fn set_health(&mut self, health: f32);

    /// Current suit battery level.
    fn battery_level(&self) -> f32;

    /// Overwrite suit battery level.
    fn set_battery_level(&mut self, level: f32);

    /// Read access to the inventory.
    fn inventory(&self) -> &Self::Inventory;

    /// Write access to the inventory.
    fn inventory_mut(&mut self) -> &mut Self::Inventory;

    /// Capture a detached copy of the current state.
    fn snapshot(&self) -> CharacterSnapshot {
        CharacterSnapshot {
            name: self.name().to_owned(),
            health: self.health(),
            battery_level: self.battery_level(),
            inventory: self.inventory().items(),
        }
    }
}
