//! File-backed persistence of character snapshots.
//!
//! One file per player at `<root>/<prefix><player id>.<extension>`. A
//! missing file means "new player" and is not an error; a present file
//! that cannot be read or parsed is. Writes go straight to the final path
//! in a single call, so a crash mid-write can leave a truncated file that
//! the next load reports as [`StoreError::Corrupt`].

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use persistence_types::{CharacterSnapshot, PlayerId};

use crate::error::StoreError;

/// Default file name prefix for player snapshots.
pub const DEFAULT_PREFIX: &str = "player_";

/// Default file extension for player snapshots.
pub const DEFAULT_EXTENSION: &str = "sbc";

/// How player ids map to file names under the save root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLayout {
    /// Text placed before the player id.
    pub prefix: String,

    /// Extension without the leading dot. Empty means no extension.
    pub extension: String,
}

impl Default for FileLayout {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_owned(),
            extension: DEFAULT_EXTENSION.to_owned(),
        }
    }
}

impl FileLayout {
    /// Create a layout from a prefix and an extension.
    ///
    /// A leading dot on the extension is tolerated and stripped.
    pub fn new(prefix: impl Into<String>, extension: &str) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.trim_start_matches('.').to_owned(),
        }
    }

    /// File name (no directory) holding the given player's snapshot.
    pub fn file_name(&self, player_id: PlayerId) -> String {
        if self.extension.is_empty() {
            format!("{}{player_id}", self.prefix)
        } else {
            format!("{}{player_id}.{}", self.prefix, self.extension)
        }
    }

    /// Recover the player id from a file name produced by [`file_name`].
    ///
    /// Returns `None` for names that do not follow this layout.
    ///
    /// [`file_name`]: FileLayout::file_name
    pub fn parse_file_name(&self, file_name: &str) -> Option<PlayerId> {
        let rest = file_name.strip_prefix(self.prefix.as_str())?;
        let digits = if self.extension.is_empty() {
            rest
        } else {
            rest.strip_suffix(self.extension.as_str())?.strip_suffix('.')?
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse::<u64>().ok().map(PlayerId)
    }
}

/// Reads and writes player snapshot files under one world save root.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    root: PathBuf,
    layout: FileLayout,
}

impl SnapshotStore {
    /// Create a store rooted at the world save directory with the default
    /// `player_<id>.sbc` layout.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_layout(root, FileLayout::default())
    }

    /// Create a store with a custom file layout.
    pub fn with_layout(root: impl Into<PathBuf>, layout: FileLayout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    /// The world save directory this store writes into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The file layout in use.
    pub const fn layout(&self) -> &FileLayout {
        &self.layout
    }

    /// Deterministic path of the given player's snapshot file.
    pub fn path_for(&self, player_id: PlayerId) -> PathBuf {
        self.root.join(self.layout.file_name(player_id))
    }

    /// Whether a snapshot file currently exists for the player.
    pub fn exists(&self, player_id: PlayerId) -> bool {
        self.path_for(player_id).is_file()
    }

    /// Load the player's last saved snapshot.
    ///
    /// Returns `Ok(None)` when no file exists (a first-time player).
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file exists but cannot be read,
    /// or [`StoreError::Corrupt`] if its contents do not parse.
    pub fn load(&self, player_id: PlayerId) -> Result<Option<CharacterSnapshot>, StoreError> {
        let path = self.path_for(player_id);

        let contents = match fs::read(&path) {
            Ok(contents) => contents,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(%player_id, path = %path.display(), "No snapshot on disk");
                return Ok(None);
            }
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        match serde_json::from_slice::<CharacterSnapshot>(&contents) {
            Ok(snapshot) => {
                tracing::debug!(
                    %player_id,
                    path = %path.display(),
                    items = snapshot.inventory.len(),
                    "Loaded snapshot"
                );
                Ok(Some(snapshot))
            }
            Err(source) => Err(StoreError::Corrupt { path, source }),
        }
    }

    /// Write the snapshot as the player's only saved state, replacing any
    /// previous file. Returns the path written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Encode`] if serialization fails, or
    /// [`StoreError::Io`] if the write fails.
    pub fn save(
        &self,
        player_id: PlayerId,
        snapshot: &CharacterSnapshot,
    ) -> Result<PathBuf, StoreError> {
        let path = self.path_for(player_id);

        let encoded = serde_json::to_string_pretty(snapshot)
            .map_err(|source| StoreError::Encode { player_id, source })?;

        if let Err(source) = fs::write(&path, encoded) {
            return Err(StoreError::Io { path, source });
        }

        tracing::debug!(
            %player_id,
            path = %path.display(),
            items = snapshot.inventory.len(),
            "Saved snapshot"
        );
        Ok(path)
    }

    /// List every player that has a snapshot file under the root, sorted.
    ///
    /// Files that do not follow the layout are ignored. A missing root
    /// directory yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the directory cannot be listed.
    pub fn saved_players(&self) -> Result<Vec<PlayerId>, StoreError> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(source) if source.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.root.clone(),
                    source,
                });
            }
        };

        let mut players = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(player_id) = entry
                .file_name()
                .to_str()
                .and_then(|name| self.layout.parse_file_name(name))
            {
                players.push(player_id);
            }
        }

        players.sort_unstable();
        Ok(players)
    }
}
