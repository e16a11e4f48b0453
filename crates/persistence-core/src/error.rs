//! Error types for the persistence core.

use persistence_store::StoreError;
use persistence_types::{ItemInstanceId, PlayerId};

use crate::host::HostError;

/// Errors raised while overwriting a live character with a saved snapshot.
///
/// Reconciliation stops at the first failing host call; earlier removals
/// and insertions stay applied.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    /// The host refused to remove an item from the live inventory.
    #[error("failed to remove item {item_id}: {source}")]
    Remove {
        /// Instance id of the item that could not be removed.
        item_id: ItemInstanceId,
        /// The host-side failure.
        source: HostError,
    },

    /// The host refused to insert a saved item into the live inventory.
    #[error("failed to insert {item_type}: {source}")]
    Insert {
        /// Item type of the stack that could not be inserted.
        item_type: String,
        /// The host-side failure.
        source: HostError,
    },
}

/// Errors surfaced by [`PersistenceService`] operations.
///
/// [`PersistenceService`]: crate::service::PersistenceService
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Loading or saving the snapshot file failed.
    #[error("snapshot store error: {source}")]
    Store {
        /// The underlying store error.
        #[from]
        source: StoreError,
    },

    /// Applying a loaded snapshot to the live character failed.
    #[error("reconcile error: {source}")]
    Reconcile {
        /// The underlying reconcile error.
        #[from]
        source: ReconcileError,
    },

    /// A player left without a tracked character, so there is nothing to save.
    #[error("no tracked character for player {0}")]
    NotTracked(PlayerId),
}
