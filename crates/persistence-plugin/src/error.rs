//! Error types for plugin startup.
//!
//! Event handlers never return errors; only constructing the plugin can
//! fail.

/// Top-level error for plugin startup.
#[derive(Debug, thiserror::Error)]
pub enum PluginError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: persistence_core::config::ConfigError,
    },
}
