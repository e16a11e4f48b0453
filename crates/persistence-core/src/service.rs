//! Load-on-join and save-on-leave, with typed results.
//!
//! [`PersistenceService`] ties the [`PendingTracker`], the
//! [`SnapshotStore`], and the [`Reconciler`] together. It never logs a
//! failure as handled: every problem is returned to the caller, which is
//! expected to be the host adapter.

use std::path::{Path, PathBuf};
use std::sync::{Arc, MutexGuard, PoisonError};

use persistence_store::SnapshotStore;
use persistence_types::PlayerId;

use crate::config::PluginConfig;
use crate::error::PersistError;
use crate::host::{LiveCharacter, SharedCharacter};
use crate::pacing::{Pacer, ThreadPacer};
use crate::reconcile::{ReconcileReport, Reconciler};
use crate::tracker::{PendingTracker, Tracked};

/// What happened when the host reported a new character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreatedOutcome {
    /// The player already had a tracked character; the entry was replaced
    /// and nothing was loaded.
    Respawned,
    /// First character of the session and no saved state exists.
    NewPlayer,
    /// First character of the session; saved state was applied to it.
    Restored(ReconcileReport),
}

/// Result of a successful save on departure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedOutcome {
    /// File the snapshot was written to.
    pub path: PathBuf,
    /// Name of the saved character.
    pub name: String,
    /// Number of inventory items written.
    pub items: usize,
}

/// Persists and restores player characters.
#[derive(Debug)]
pub struct PersistenceService<C, P = ThreadPacer> {
    store: SnapshotStore,
    tracker: PendingTracker<SharedCharacter<C>>,
    reconciler: Reconciler<P>,
}

impl<C: LiveCharacter> PersistenceService<C, ThreadPacer> {
    /// Build a service from configuration, storing files under the
    /// configured override or else `world_save_root`.
    pub fn from_config(config: &PluginConfig, world_save_root: &Path) -> Self {
        let store = SnapshotStore::with_layout(
            config.storage.resolve_root(world_save_root),
            config.storage.layout(),
        );
        let reconciler = Reconciler::new(config.reconcile.pacing(), ThreadPacer);
        Self::new(store, reconciler)
    }
}

impl<C: LiveCharacter, P: Pacer> PersistenceService<C, P> {
    /// Create a service from its parts.
    pub const fn new(store: SnapshotStore, reconciler: Reconciler<P>) -> Self {
        Self {
            store,
            tracker: PendingTracker::new(),
            reconciler,
        }
    }

    /// The underlying snapshot store.
    pub const fn store(&self) -> &SnapshotStore {
        &self.store
    }

    /// The player-to-character correlation table.
    pub const fn tracker(&self) -> &PendingTracker<SharedCharacter<C>> {
        &self.tracker
    }

    /// Handle a character appearing in the world.
    ///
    /// The first character seen for a player is treated as the join: any
    /// saved snapshot is loaded and applied to it. A character for an
    /// already-tracked player is a respawn and only replaces the entry.
    ///
    /// The character is tracked before loading, so a later departure can
    /// still be saved even if loading or reconciling fails here.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::Store`] if the saved file exists but cannot
    /// be read or parsed, or [`PersistError::Reconcile`] if the host
    /// rejects an inventory change.
    pub fn character_created(
        &self,
        character: &SharedCharacter<C>,
    ) -> Result<CreatedOutcome, PersistError> {
        let player_id = lock_character(character).player_id();

        if self.tracker.track(player_id, Arc::clone(character)) == Tracked::Respawned {
            return Ok(CreatedOutcome::Respawned);
        }

        let Some(archival) = self.store.load(player_id)? else {
            return Ok(CreatedOutcome::NewPlayer);
        };

        let mut live = lock_character(character);
        let report = self.reconciler.reconcile(&mut *live, &archival)?;
        Ok(CreatedOutcome::Restored(report))
    }

    /// Handle a player leaving: save their tracked character.
    ///
    /// The tracker entry is removed before saving, so it is gone whether
    /// or not the save succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`PersistError::NotTracked`] if no character is tracked for
    /// the player (nothing is written), or [`PersistError::Store`] if the
    /// write fails.
    pub fn player_left(&self, player_id: PlayerId) -> Result<SavedOutcome, PersistError> {
        let character = self
            .tracker
            .take(player_id)
            .ok_or(PersistError::NotTracked(player_id))?;

        let snapshot = lock_character(&character).snapshot();
        let path = self.store.save(player_id, &snapshot)?;

        Ok(SavedOutcome {
            path,
            items: snapshot.inventory.len(),
            name: snapshot.name,
        })
    }
}

/// Lock a shared character, recovering the guard if a previous holder
/// panicked.
pub fn lock_character<C>(character: &SharedCharacter<C>) -> MutexGuard<'_, C> {
    character.lock().unwrap_or_else(PoisonError::into_inner)
}
