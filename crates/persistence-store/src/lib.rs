//! Snapshot storage for player characters.
//!
//! Every player owns at most one file under the world save root, named
//! deterministically from the [`PlayerId`]. A save replaces the whole
//! file; a load reads the whole file. There is no versioning, header, or
//! checksum.
//!
//! ```text
//! <world-save-root>/
//!     player_76561198000000001.sbc
//!     player_76561198000000002.sbc
//! ```
//!
//! # Modules
//!
//! - [`snapshot_store`] -- File layout, load, save, and enumeration
//! - [`error`] -- Shared error types
//!
//! [`PlayerId`]: persistence_types::PlayerId

pub mod error;
pub mod snapshot_store;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use snapshot_store::{FileLayout, SnapshotStore};
