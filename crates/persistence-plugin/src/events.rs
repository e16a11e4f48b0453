//! Contracts the host expects a plugin to fulfil.
//!
//! The host fires these callbacks from its own event dispatch thread and
//! ignores anything they might produce, so none of them return a value.

use persistence_core::host::SharedCharacter;
use persistence_types::PlayerId;

/// Receiver for the host's player session and character lifecycle events.
///
/// Session events carry only the player id; character events carry only
/// the character. The two pairs fire independently.
pub trait PlayerEventHandler<C> {
    /// A player connected. The character may not exist yet.
    fn on_player_joined(&self, player_id: PlayerId);

    /// A player disconnected.
    fn on_player_left(&self, player_id: PlayerId);

    /// A character spawned in the world.
    fn on_character_created(&self, character: &SharedCharacter<C>);

    /// A character was removed from the world.
    fn on_character_deleted(&self, character: &SharedCharacter<C>);
}

/// Lifecycle hooks every host plugin exposes.
pub trait HostPlugin {
    /// Identifier the host registered the plugin under.
    fn id(&self) -> &str;

    /// Called once after the plugin is registered.
    fn init(&self);

    /// Called periodically by the host's update loop.
    fn update(&self);
}
