//! Correlation table between player sessions and live characters.
//!
//! Departure events carry only a [`PlayerId`]; character events carry only
//! the character. [`PendingTracker`] remembers the most recent character
//! handle for each player so that a departure can still find the object to
//! persist. Every read-modify-write happens under one mutex, since the host
//! does not promise to deliver events on a single thread.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use persistence_types::PlayerId;

/// How a newly reported character relates to what was already tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tracked {
    /// No entry existed; this is the player's first character of the session.
    Joined,
    /// An entry already existed and was replaced.
    Respawned,
}

/// Map from player to the latest live character handle.
#[derive(Debug)]
pub struct PendingTracker<H> {
    entries: Mutex<BTreeMap<PlayerId, H>>,
}

impl<H> PendingTracker<H> {
    /// Create an empty tracker.
    pub const fn new() -> Self {
        Self {
            entries: Mutex::new(BTreeMap::new()),
        }
    }

    /// Record `handle` as the player's current character.
    ///
    /// Replaces any previous entry. The return value says whether one
    /// existed.
    pub fn track(&self, player_id: PlayerId, handle: H) -> Tracked {
        match self.lock().insert(player_id, handle) {
            Some(_) => Tracked::Respawned,
            None => Tracked::Joined,
        }
    }

    /// Remove and return the player's tracked character.
    pub fn take(&self, player_id: PlayerId) -> Option<H> {
        self.lock().remove(&player_id)
    }

    /// Whether a character is tracked for the player.
    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.lock().contains_key(&player_id)
    }

    /// Number of tracked players.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing is tracked.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave the map half-updated
    // (every operation is a single map call), so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, BTreeMap<PlayerId, H>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<H> Default for PendingTracker<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Clone> PendingTracker<H> {
    /// Clone of the player's tracked handle, leaving the entry in place.
    pub fn get(&self, player_id: PlayerId) -> Option<H> {
        self.lock().get(&player_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn first_track_is_join() {
        let tracker = PendingTracker::new();
        assert_eq!(tracker.track(PlayerId(1), "x"), Tracked::Joined);
        assert!(tracker.contains(PlayerId(1)));
    }

    #[test]
    fn second_track_is_respawn_and_replaces() {
        let tracker = PendingTracker::new();
        tracker.track(PlayerId(1), "first");
        assert_eq!(tracker.track(PlayerId(1), "second"), Tracked::Respawned);
        assert_eq!(tracker.get(PlayerId(1)), Some("second"));
        assert_eq!(tracker.len(), 1);
    }

    #[test]
    fn take_removes_entry() {
        let tracker = PendingTracker::new();
        tracker.track(PlayerId(9), 9_u8);
        assert_eq!(tracker.take(PlayerId(9)), Some(9));
        assert_eq!(tracker.take(PlayerId(9)), None);
        assert!(tracker.is_empty());
    }

    #[test]
    fn track_after_take_is_join_again() {
        let tracker = PendingTracker::new();
        tracker.track(PlayerId(2), ());
        tracker.take(PlayerId(2));
        assert_eq!(tracker.track(PlayerId(2), ()), Tracked::Joined);
    }

    #[test]
    fn concurrent_tracks_yield_exactly_one_join() {
        let tracker = Arc::new(PendingTracker::new());
        let handles: Vec<_> = (0..8_u32)
            .map(|n| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || tracker.track(PlayerId(5), n))
            })
            .collect();

        let joins = handles
            .into_iter()
            .filter_map(|h| h.join().ok())
            .filter(|t| *t == Tracked::Joined)
            .count();
        assert_eq!(joins, 1);
        assert_eq!(tracker.len(), 1);
    }
}
