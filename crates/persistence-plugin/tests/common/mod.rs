//! Stand-in for the host game: an engineer character carrying a backpack.
//!
//! Item ids come from the backpack's counter the way the host assigns
//! them, and freshly spawned engineers carry the default spawn kit.

use std::path::Path;
use std::sync::{Arc, Mutex};

use persistence_core::host::{HostError, LiveCharacter, LiveInventory, SharedCharacter};
use persistence_core::pacing::{NoPacing, ReconcilePacing};
use persistence_core::reconcile::Reconciler;
use persistence_core::service::PersistenceService;
use persistence_plugin::PlayerPersistencePlugin;
use persistence_store::SnapshotStore;
use persistence_types::{InventoryItem, ItemInstanceId, PlayerId};
use rust_decimal::Decimal;

/// Live inventory owned by the host.
#[derive(Debug, Default)]
pub struct Backpack {
    items: Vec<InventoryItem>,
    next_id: ItemInstanceId,
    refreshes: usize,
}

impl Backpack {
    pub const fn refreshes(&self) -> usize {
        self.refreshes
    }
}

impl LiveInventory for Backpack {
    fn refresh(&mut self) {
        self.refreshes = self.refreshes.saturating_add(1);
    }

    fn items(&self) -> Vec<InventoryItem> {
        self.items.clone()
    }

    fn add_item(&mut self, item: InventoryItem) -> Result<(), HostError> {
        if item.item_type.is_empty() {
            return Err(HostError::ItemRejected {
                item_type: item.item_type,
                reason: "no definition".to_owned(),
            });
        }
        self.items.push(item);
        Ok(())
    }

    fn remove_item(&mut self, item_id: ItemInstanceId) -> Result<(), HostError> {
        let before = self.items.len();
        self.items.retain(|item| item.item_id != item_id);
        if self.items.len() == before {
            return Err(HostError::ItemMissing(item_id));
        }
        Ok(())
    }

    fn next_item_id(&self) -> ItemInstanceId {
        self.next_id
    }

    fn set_next_item_id(&mut self, next: ItemInstanceId) {
        self.next_id = next;
    }
}

/// Live character owned by the host.
#[derive(Debug)]
pub struct Engineer {
    player_id: PlayerId,
    name: String,
    health: f32,
    battery_level: f32,
    backpack: Backpack,
}

impl Engineer {
    /// A freshly spawned engineer: full health, full battery, spawn kit.
    pub fn spawn(player_id: PlayerId, name: &str) -> Self {
        let mut engineer = Self {
            player_id,
            name: name.to_owned(),
            health: 100.0,
            battery_level: 1.0,
            backpack: Backpack::default(),
        };
        engineer.pick_up("PhysicalGunObject/WelderItem", Decimal::ONE);
        engineer.pick_up("PhysicalGunObject/AngleGrinderItem", Decimal::ONE);
        engineer
    }

    /// Add an item as the host would when the player picks it up.
    pub fn pick_up(&mut self, item_type: &str, quantity: Decimal) {
        let item_id = self.backpack.next_id;
        self.backpack
            .items
            .push(InventoryItem::new(item_type, quantity, item_id));
        self.backpack.next_id = item_id.successor();
    }

    /// Take damage and drain the suit battery.
    pub fn wear(&mut self, health: f32, battery_level: f32) {
        self.health = health;
        self.battery_level = battery_level;
    }

    pub fn shared(self) -> SharedCharacter<Self> {
        Arc::new(Mutex::new(self))
    }
}

impl LiveCharacter for Engineer {
    type Inventory = Backpack;

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

    fn inventory(&self) -> &Backpack {
        &self.backpack
    }

    fn inventory_mut(&mut self) -> &mut Backpack {
        &mut self.backpack
    }
}

/// A plugin storing files under `root` that never sleeps.
pub fn plugin(root: &Path) -> PlayerPersistencePlugin<Engineer, NoPacing> {
    let service = PersistenceService::new(
        SnapshotStore::new(root),
        Reconciler::new(ReconcilePacing::NONE, NoPacing),
    );
    PlayerPersistencePlugin::with_service("PlayerPersistence", service)
}
