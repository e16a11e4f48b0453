//! Type-safe identifier wrappers.
//!
//! Player identifiers come from the remote platform account (a 64-bit
//! number assigned outside the game). Item instance identifiers come from
//! the monotonic counter each host inventory owns. Both are wrapped so
//! they can never be mixed up at compile time.

use serde::{Deserialize, Serialize};

/// Generates a transparent newtype wrapper around an unsigned integer.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident($inner:ty)
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            Default,
            Serialize,
            Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub $inner);

        impl $name {
            /// Return the inner integer value.
            pub const fn into_inner(self) -> $inner {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Remote platform account id of a player.
    ///
    /// The sole lookup key for tracked characters and persisted files.
    PlayerId(u64)
}

define_id! {
    /// Instance id of one item stack inside a character's inventory.
    ItemInstanceId(u32)
}

impl ItemInstanceId {
    /// The id the host counter hands out after this one.
    ///
    /// Saturates at `u32::MAX` instead of wrapping.
    #[must_use]
    pub const fn successor(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// The id the host counter held before this one.
    ///
    /// Saturates at zero.
    #[must_use]
    pub const fn predecessor(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_id_displays_as_number() {
        let id = PlayerId(76_561_198_000_000_001);
        assert_eq!(id.to_string(), "76561198000000001");
    }

    #[test]
    fn player_id_serializes_transparently() {
        let json = serde_json::to_string(&PlayerId(42)).ok();
        assert_eq!(json.as_deref(), Some("42"));
    }

    #[test]
    fn item_counter_steps_saturate() {
        assert_eq!(ItemInstanceId(5).successor(), ItemInstanceId(6));
        assert_eq!(ItemInstanceId(5).predecessor(), ItemInstanceId(4));
        assert_eq!(ItemInstanceId(0).predecessor(), ItemInstanceId(0));
        assert_eq!(ItemInstanceId(u32::MAX).successor(), ItemInstanceId(u32::MAX));
    }
}
