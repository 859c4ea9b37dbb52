//! Arena handles for actors.
//!
//! Actors live in a single arena owned by the world map. Everything else,
//! including the grid's occupancy table and a hoarder's held item, refers to
//! them by [`ActorId`]. Handles are handed out monotonically and never
//! reused, so a stale handle can only miss, never alias another actor.

use serde::{Deserialize, Serialize};

/// Handle of an actor in the world's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub u64);

impl ActorId {
    /// Wrap a raw arena index.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The handle that follows this one, or `None` once the index space is
    /// exhausted.
    pub const fn next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl core::fmt::Display for ActorId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "actor#{}", self.0)
    }
}

impl From<u64> for ActorId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_monotonic() {
        let first = ActorId::new(0);
        assert_eq!(first.next(), Some(ActorId::new(1)));
        assert!(first < ActorId::new(1));
    }

    #[test]
    fn next_stops_at_the_end_of_the_index_space() {
        assert_eq!(ActorId::new(u64::MAX).next(), None);
    }

    #[test]
    fn display_is_prefixed() {
        assert_eq!(ActorId::new(7).to_string(), "actor#7");
    }

    #[test]
    fn serializes_as_bare_number() {
        let json = serde_json::to_string(&ActorId::new(12)).unwrap_or_default();
        assert_eq!(json, "12");
    }
}
