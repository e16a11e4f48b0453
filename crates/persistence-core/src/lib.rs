//! Tracking, reconciliation, and configuration for player persistence.
//!
//! The host game fires two independent event streams: player sessions
//! (join/leave, carrying only a [`PlayerId`]) and character objects
//! (created/deleted, carrying the live character). This crate correlates
//! them and decides what to load, what to overwrite, and what to save.
//!
//! ```text
//! character created --> PendingTracker::track --(first time)--> load + reconcile
//!                                              --(again)-------> respawn, no load
//! player left -------> PendingTracker::take  --(found)--------> save snapshot
//!                                              --(missing)------> NotTracked
//! ```
//!
//! Every operation here returns a typed `Result`; turning failures into
//! log lines is left to the outermost host adapter.
//!
//! # Modules
//!
//! - [`config`] -- YAML configuration for storage, pacing, and logging
//! - [`error`] -- [`PersistError`] and [`ReconcileError`]
//! - [`host`] -- Capability traits the host's live objects implement
//! - [`pacing`] -- Tunable delays between inventory mutations
//! - [`reconcile`] -- Overwriting a live character with a saved snapshot
//! - [`service`] -- [`PersistenceService`], the event flow with typed results
//! - [`tracker`] -- [`PendingTracker`], the player-to-character correlation table
//!
//! [`PlayerId`]: persistence_types::PlayerId
//! [`PersistError`]: error::PersistError
//! [`ReconcileError`]: error::ReconcileError
//! [`PersistenceService`]: service::PersistenceService
//! [`PendingTracker`]: tracker::PendingTracker

pub mod config;
pub mod error;
pub mod host;
pub mod pacing;
pub mod reconcile;
pub mod service;
pub mod tracker;

#[cfg(test)]
pub(crate) mod testing;
