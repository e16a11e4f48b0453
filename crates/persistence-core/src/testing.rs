//! In-memory stand-ins for the host's live objects, used by unit tests.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use persistence_types::{InventoryItem, ItemInstanceId, PlayerId};
use rust_decimal::Decimal;

use crate::host::{HostError, LiveCharacter, LiveInventory, SharedCharacter};
use crate::pacing::Pacer;

/// Inventory that records every call it receives.
#[derive(Debug, Default)]
pub struct MockInventory {
    items: Vec<InventoryItem>,
    next_id: ItemInstanceId,
    log: Vec<String>,
    fail_removal: Option<ItemInstanceId>,
    rejected_types: Vec<String>,
}

impl MockInventory {
    pub fn log(&self) -> &[String] {
        &self.log
    }

    pub fn fail_removal_of(&mut self, item_id: ItemInstanceId) {
        self.fail_removal = Some(item_id);
    }

    pub fn reject_type(&mut self, item_type: &str) {
        self.rejected_types.push(item_type.to_owned());
    }
}

impl LiveInventory for MockInventory {
    fn refresh(&mut self) {
        self.log.push("refresh".to_owned());
    }

    fn items(&self) -> Vec<InventoryItem> {
        self.items.clone()
    }

    fn add_item(&mut self, item: InventoryItem) -> Result<(), HostError> {
        if self.rejected_types.contains(&item.item_type) {
            return Err(HostError::ItemRejected {
                item_type: item.item_type,
                reason: "unknown definition".to_owned(),
            });
        }
        self.log.push(format!("add {}", item.item_type));
        self.items.push(item);
        Ok(())
    }

    fn remove_item(&mut self, item_id: ItemInstanceId) -> Result<(), HostError> {
        if self.fail_removal == Some(item_id) {
            return Err(HostError::ItemRejected {
                item_type: String::from("locked"),
                reason: "item is locked".to_owned(),
            });
        }
        let before = self.items.len();
        self.items.retain(|item| item.item_id != item_id);
        if self.items.len() == before {
            return Err(HostError::ItemMissing(item_id));
        }
        self.log.push(format!("remove {item_id}"));
        Ok(())
    }

    fn next_item_id(&self) -> ItemInstanceId {
        self.next_id
    }

    fn set_next_item_id(&mut self, next: ItemInstanceId) {
        self.next_id = next;
    }
}

/// Character backed by plain fields.
#[derive(Debug)]
pub struct MockCharacter {
    player_id: PlayerId,
    name: String,
    health: f32,
    battery_level: f32,
    inventory: MockInventory,
}

impl MockCharacter {
    pub fn new(player_id: PlayerId, name: &str, health: f32, battery_level: f32) -> Self {
        Self {
            player_id,
            name: name.to_owned(),
            health,
            battery_level,
            inventory: MockInventory::default(),
        }
    }

    /// Add an item the way the host would when the player picks it up.
    pub fn give(&mut self, item_type: &str, quantity: Decimal) {
        let item_id = self.inventory.next_id;
        self.inventory
            .items
            .push(InventoryItem::new(item_type, quantity, item_id));
        self.inventory.next_id = item_id.successor();
    }

    pub fn shared(self) -> SharedCharacter<Self> {
        Arc::new(Mutex::new(self))
    }
}

impl LiveCharacter for MockCharacter {
    type Inventory = MockInventory;

    fn player_id(&self) -> PlayerId {
        self.player_id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn health(&self) -> f32 {
        self.health
    }

    fn set_health(&mut self, health: f32) {
        self.health = health;
    }

    fn battery_level(&self) -> f32 {
        self.battery_level
    }

    fn set_battery_level(&mut self, level: f32) {
        self.battery_level = level;
    }

    fn inventory(&self) -> &MockInventory {
        &self.inventory
    }

    fn inventory_mut(&mut self) -> &mut MockInventory {
        &mut self.inventory
    }
}

/// Pacer that remembers every requested delay instead of sleeping.
#[derive(Debug, Default)]
pub struct RecordingPacer {
    pauses: Mutex<Vec<Duration>>,
}

impl RecordingPacer {
    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Pacer for RecordingPacer {
    fn pause(&self, delay: Duration) {
        self.pauses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(delay);
    }
}
