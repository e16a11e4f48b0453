//! Error types for the snapshot store.
//!
//! Each variant carries the path or player involved so a single log line
//! is enough for an operator to find the offending file.

use std::path::PathBuf;

use persistence_types::PlayerId;

/// Errors that can occur while reading or writing player snapshots.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The file system refused a read, write, or directory listing.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A snapshot file exists but does not parse.
    #[error("corrupt snapshot file {}: {source}", path.display())]
    Corrupt {
        /// The file that failed to parse.
        path: PathBuf,
        /// The underlying parse error.
        source: serde_json::Error,
    },

    /// A snapshot could not be serialized.
    #[error("failed to encode snapshot for player {player_id}: {source}")]
    Encode {
        /// The player whose snapshot was being written.
        player_id: PlayerId,
        /// The underlying serialization error.
        source: serde_json::Error,
    },
}
