//! Overwriting a live character with a previously saved snapshot.
//!
//! The host inventory has no "replace contents" primitive, only
//! item-by-item insert and remove, so the live inventory is emptied item
//! by item and then refilled from the snapshot in stored order. The live
//! instance-id counter is walked down once per removal and up once per
//! insertion, and every inserted item takes its id from that counter.
//!
//! Ancillary toggles (lights, jetpack, dampeners) are left as the host
//! spawned them.

use persistence_types::CharacterSnapshot;

use crate::error::ReconcileError;
use crate::host::{LiveCharacter, LiveInventory};
use crate::pacing::{Pacer, ReconcilePacing, ThreadPacer};

/// Counts of inventory operations performed by one reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileReport {
    /// Live items removed.
    pub removed: usize,
    /// Saved items inserted.
    pub inserted: usize,
}

/// Applies archival snapshots to live characters.
#[derive(Debug, Clone, Default)]
pub struct Reconciler<P = ThreadPacer> {
    pacing: ReconcilePacing,
    pacer: P,
}

impl<P: Pacer> Reconciler<P> {
    /// Create a reconciler with the given delays and pacer.
    pub const fn new(pacing: ReconcilePacing, pacer: P) -> Self {
        Self { pacing, pacer }
    }

    /// Make `live` adopt the state recorded in `archival`.
    ///
    /// Health and battery are copied first, then the inventory is
    /// refreshed, emptied, and refilled.
    ///
    /// # Errors
    ///
    /// Returns [`ReconcileError`] on the first host call that fails. Work
    /// already done is not rolled back.
    pub fn reconcile<C: LiveCharacter>(
        &self,
        live: &mut C,
        archival: &CharacterSnapshot,
    ) -> Result<ReconcileReport, ReconcileError> {
        live.set_health(archival.health);
        live.set_battery_level(archival.battery_level);

        let inventory = live.inventory_mut();
        inventory.refresh();

        let mut report = ReconcileReport::default();

        for item in inventory.items() {
            inventory
                .remove_item(item.item_id)
                .map_err(|source| ReconcileError::Remove {
                    item_id: item.item_id,
                    source,
                })?;
            let next = inventory.next_item_id().predecessor();
            inventory.set_next_item_id(next);
            report.removed = report.removed.saturating_add(1);
            self.pacer.pause(self.pacing.removal_delay);
        }

        for item in &archival.inventory {
            let item_id = inventory.next_item_id();
            inventory
                .add_item(item.with_item_id(item_id))
                .map_err(|source| ReconcileError::Insert {
                    item_type: item.item_type.clone(),
                    source,
                })?;
            inventory.set_next_item_id(item_id.successor());
            report.inserted = report.inserted.saturating_add(1);
            self.pacer.pause(self.pacing.insertion_delay);
        }

        tracing::debug!(
            removed = report.removed,
            inserted = report.inserted,
            "Reconciled live character"
        );
        Ok(report)
    }
}
