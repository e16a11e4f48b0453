//! The plugin object the host registers.
//!
//! Each handler reads what it needs from the event, delegates to
//! [`PersistenceService`], and reports the outcome as a status line under
//! the [`LOG_TARGET`] target. Errors stop here.

use std::path::Path;

use persistence_core::config::PluginConfig;
use persistence_core::error::PersistError;
use persistence_core::host::{LiveCharacter, SharedCharacter};
use persistence_core::pacing::{Pacer, ThreadPacer};
use persistence_core::service::{CreatedOutcome, PersistenceService, lock_character};
use persistence_types::PlayerId;
use tracing::{debug, error, info};

use crate::error::PluginError;
use crate::events::{HostPlugin, PlayerEventHandler};
use crate::logging;

/// Fixed tag on every operator-facing status line.
pub const LOG_TARGET: &str = "player_persistence";

/// Saves a player's character when they leave and restores it the next
/// time their character spawns.
#[derive(Debug)]
pub struct PlayerPersistencePlugin<C, P = ThreadPacer> {
    id: String,
    service: PersistenceService<C, P>,
}

impl<C: LiveCharacter> PlayerPersistencePlugin<C> {
    /// Build the plugin from configuration, storing files under the
    /// configured override or else the host's `world_save_root`.
    pub fn new(id: impl Into<String>, config: &PluginConfig, world_save_root: &Path) -> Self {
        Self::with_service(id, PersistenceService::from_config(config, world_save_root))
    }

    /// Load configuration from `config_path`, initialize logging, and
    /// build the plugin.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::Config`] if the file cannot be read or parsed.
    pub fn from_config_file(
        id: impl Into<String>,
        config_path: &Path,
        world_save_root: &Path,
    ) -> Result<Self, PluginError> {
        let config = PluginConfig::from_file(config_path)?;
        logging::init(&config.logging);
        let plugin = Self::new(id, &config, world_save_root);
        info!(
            target: LOG_TARGET,
            save_root = %plugin.service.store().root().display(),
            removal_delay_ms = config.reconcile.removal_delay_ms,
            insertion_delay_ms = config.reconcile.insertion_delay_ms,
            "Configuration loaded"
        );
        Ok(plugin)
    }
}

impl<C: LiveCharacter, P: Pacer> PlayerPersistencePlugin<C, P> {
    /// Wrap an already constructed service.
    pub fn with_service(id: impl Into<String>, service: PersistenceService<C, P>) -> Self {
        Self {
            id: id.into(),
            service,
        }
    }

    /// The service doing the actual work.
    pub const fn service(&self) -> &PersistenceService<C, P> {
        &self.service
    }
}

impl<C: LiveCharacter, P: Pacer> PlayerEventHandler<C> for PlayerPersistencePlugin<C, P> {
    fn on_player_joined(&self, player_id: PlayerId) {
        // Loading waits for the character, which does not exist yet.
        debug!(target: LOG_TARGET, %player_id, "Player {player_id} connected");
    }

    fn on_player_left(&self, player_id: PlayerId) {
        match self.service.player_left(player_id) {
            Ok(saved) => info!(
                target: LOG_TARGET,
                %player_id,
                path = %saved.path.display(),
                items = saved.items,
                "Player {} left the server, data saved",
                saved.name
            ),
            Err(PersistError::NotTracked(_)) => error!(
                target: LOG_TARGET,
                %player_id,
                "Player {player_id} left but no character was tracked, nothing saved"
            ),
            Err(e) => error!(
                target: LOG_TARGET,
                %player_id,
                error = %e,
                "Could not save data for player {player_id}"
            ),
        }
    }

    fn on_character_created(&self, character: &SharedCharacter<C>) {
        let (player_id, name) = {
            let live = lock_character(character);
            (live.player_id(), live.name().to_owned())
        };

        match self.service.character_created(character) {
            Ok(CreatedOutcome::Respawned) => {
                info!(target: LOG_TARGET, %player_id, %name, "Player {name} respawned");
            }
            Ok(CreatedOutcome::NewPlayer) => {
                info!(
                    target: LOG_TARGET,
                    %player_id,
                    %name,
                    "Player {name} ({player_id}) joined the server, no saved data"
                );
            }
            Ok(CreatedOutcome::Restored(report)) => {
                info!(
                    target: LOG_TARGET,
                    %player_id,
                    %name,
                    removed = report.removed,
                    inserted = report.inserted,
                    "Player {name} joined the server, finished loading saved data"
                );
            }
            Err(e) => {
                error!(
                    target: LOG_TARGET,
                    %player_id,
                    %name,
                    error = %e,
                    "Could not load {name} ({player_id}) data, keeping spawned state"
                );
            }
        }
    }

    fn on_character_deleted(&self, _character: &SharedCharacter<C>) {}
}

impl<C, P> HostPlugin for PlayerPersistencePlugin<C, P> {
    fn id(&self) -> &str {
        &self.id
    }

    fn init(&self) {
        info!(target: LOG_TARGET, "Player persistence plugin '{}' initialized", self.id);
    }

    fn update(&self) {}
}
