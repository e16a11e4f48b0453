//! Shared type definitions for player character persistence.
//!
//! This crate is the single source of truth for the values that flow
//! between the host game, the snapshot store, and the reconciliation
//! logic. Nothing here performs I/O.
//!
//! # Modules
//!
//! - [`ids`] -- Strongly-typed identifiers (players, item instances)
//! - [`snapshot`] -- Character snapshots and inventory item records

pub mod ids;
pub mod snapshot;

// Re-export all public types at crate root for convenience.
pub use ids::{ItemInstanceId, PlayerId};
pub use snapshot::{CharacterSnapshot, InventoryItem};
