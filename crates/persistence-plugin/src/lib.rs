//! Host game plugin that saves and restores player characters.
//!
//! This is the outermost layer: the host calls the event handlers on
//! [`PlayerPersistencePlugin`] and never sees a return value. Everything
//! that goes wrong below is turned into an operator-facing log line here
//! and nowhere else, so no failure can propagate back into the host's
//! event dispatcher.
//!
//! # Startup Sequence
//!
//! 1. Load `player-persistence.yaml` ([`PluginConfig`])
//! 2. Initialize logging ([`logging::init`])
//! 3. Build the plugin against the world save directory the host resolved
//! 4. Register the four event handlers with the host and call
//!    [`HostPlugin::init`]
//!
//! # Modules
//!
//! - [`error`] -- [`PluginError`] for startup failures
//! - [`events`] -- [`PlayerEventHandler`] and [`HostPlugin`] host contracts
//! - [`logging`] -- `tracing-subscriber` setup
//! - [`plugin`] -- [`PlayerPersistencePlugin`]
//!
//! [`PluginConfig`]: persistence_core::config::PluginConfig
//! [`PluginError`]: error::PluginError
//! [`PlayerEventHandler`]: events::PlayerEventHandler
//! [`HostPlugin`]: events::HostPlugin
//! [`HostPlugin::init`]: events::HostPlugin::init
//! [`PlayerPersistencePlugin`]: plugin::PlayerPersistencePlugin

pub mod error;
pub mod events;
pub mod logging;
pub mod plugin;

pub use error::PluginError;
pub use events::{HostPlugin, PlayerEventHandler};
pub use plugin::{LOG_TARGET, PlayerPersistencePlugin};
