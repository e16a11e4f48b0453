//! Configuration loading and typed config structures for the plugin.
//!
//! The canonical configuration lives in `player-persistence.yaml` at the
//! project root. Every section and field is optional; anything left out
//! falls back to the defaults below.

use std::path::{Path, PathBuf};

use persistence_store::FileLayout;
use persistence_store::snapshot_store::{DEFAULT_EXTENSION, DEFAULT_PREFIX};
use serde::Deserialize;

use crate::pacing::ReconcilePacing;

/// Environment variable that overrides `storage.save_root`.
pub const SAVE_ROOT_ENV: &str = "PLAYER_PERSISTENCE_SAVE_ROOT";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level plugin configuration.
///
/// Mirrors the structure of `player-persistence.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PluginConfig {
    /// Where and how snapshot files are written.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Delays applied while reconciling inventories.
    #[serde(default)]
    pub reconcile: ReconcileConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PluginConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// `PLAYER_PERSISTENCE_SAVE_ROOT` overrides `storage.save_root` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml(&contents)?;
        config.storage.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config = Self::from_yaml(yaml)?;
        config.storage.apply_env_overrides();
        Ok(config)
    }

    fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Snapshot file placement.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StorageConfig {
    /// File name prefix placed before the player id.
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// File extension, without the leading dot.
    #[serde(default = "default_file_extension")]
    pub file_extension: String,

    /// Directory to store snapshots in instead of the host's world save
    /// directory.
    #[serde(default)]
    pub save_root: Option<PathBuf>,
}

impl StorageConfig {
    /// Override `save_root` from the environment when set.
    ///
    /// An empty value is treated as unset.
    pub fn apply_env_overrides(&mut self) {
        self.override_save_root(std::env::var(SAVE_ROOT_ENV).ok());
    }

    fn override_save_root(&mut self, value: Option<String>) {
        if let Some(val) = value.filter(|v| !v.is_empty()) {
            self.save_root = Some(PathBuf::from(val));
        }
    }

    /// File layout described by this section.
    pub fn layout(&self) -> FileLayout {
        FileLayout::new(self.file_prefix.clone(), &self.file_extension)
    }

    /// The directory snapshots go to: the configured override if any,
    /// otherwise the world save root the host resolved.
    pub fn resolve_root(&self, world_save_root: &Path) -> PathBuf {
        self.save_root
            .clone()
            .unwrap_or_else(|| world_save_root.to_path_buf())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_prefix: default_file_prefix(),
            file_extension: default_file_extension(),
            save_root: None,
        }
    }
}

/// Pacing between individual inventory mutations during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReconcileConfig {
    /// Milliseconds to wait after removing each live item.
    #[serde(default = "default_removal_delay_ms")]
    pub removal_delay_ms: u64,

    /// Milliseconds to wait after inserting each saved item.
    #[serde(default = "default_insertion_delay_ms")]
    pub insertion_delay_ms: u64,
}

impl ReconcileConfig {
    /// Delays as a [`ReconcilePacing`].
    pub const fn pacing(&self) -> ReconcilePacing {
        ReconcilePacing::from_millis(self.removal_delay_ms, self.insertion_delay_ms)
    }
}

impl Default for ReconcileConfig {
    fn default() -> Self {
        Self {
            removal_delay_ms: default_removal_delay_ms(),
            insertion_delay_ms: default_insertion_delay_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (serde default requires named functions)
// ---------------------------------------------------------------------------

fn default_file_prefix() -> String {
    DEFAULT_PREFIX.to_owned()
}

fn default_file_extension() -> String {
    DEFAULT_EXTENSION.to_owned()
}

const fn default_removal_delay_ms() -> u64 {
    50
}

const fn default_insertion_delay_ms() -> u64 {
    50
}

fn default_log_level() -> String {
    "info".to_owned()
}
