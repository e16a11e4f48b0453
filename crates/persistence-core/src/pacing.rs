//! Delays between individual inventory mutations.
//!
//! Reconciliation removes and inserts items one at a time and pauses after
//! each step so the host simulation is not hit with a burst of inventory
//! changes. The pause blocks the calling thread, which is the host's event
//! dispatch thread, for roughly `items * delay`.

use std::time::Duration;

/// Delay applied after each removal and each insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcilePacing {
    /// Pause after removing one live item.
    pub removal_delay: Duration,

    /// Pause after inserting one saved item.
    pub insertion_delay: Duration,
}

impl ReconcilePacing {
    /// No pauses at all.
    pub const NONE: Self = Self {
        removal_delay: Duration::ZERO,
        insertion_delay: Duration::ZERO,
    };

    /// Build pacing from millisecond values.
    pub const fn from_millis(removal_ms: u64, insertion_ms: u64) -> Self {
        Self {
            removal_delay: Duration::from_millis(removal_ms),
            insertion_delay: Duration::from_millis(insertion_ms),
        }
    }
}

/// Something that can wait for a given duration.
pub trait Pacer {
    /// Wait for `delay`. A zero delay should return immediately.
    fn pause(&self, delay: Duration);
}

/// Blocks the current thread with [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn pause(&self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    fn pause(&self, _delay: Duration) {}
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use super::*;

    #[test]
    fn from_millis_builds_durations() {
        let pacing = ReconcilePacing::from_millis(20, 35);
        assert_eq!(pacing.removal_delay, Duration::from_millis(20));
        assert_eq!(pacing.insertion_delay, Duration::from_millis(35));
    }

    #[test]
    fn default_is_no_delay() {
        assert_eq!(ReconcilePacing::default(), ReconcilePacing::NONE);
    }

    #[test]
    fn thread_pacer_sleeps_at_least_delay() {
        let start = Instant::now();
        ThreadPacer.pause(Duration::from_millis(5));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }

    #[test]
    fn thread_pacer_skips_zero() {
        let start = Instant::now();
        ThreadPacer.pause(Duration::ZERO);
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
