//! Team references.
//!
//! Team-set cards carry a team instead of (or in addition to) a player.

use serde::{Deserialize, Serialize};

/// Unique identifier for a team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    /// Create a new team ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TeamId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Team({})", self.0)
    }
}

/// Team reference carried on a card.
///
/// Rankings group by `id`, never by `full_name`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    /// Unique team identifier (the grouping key).
    pub id: TeamId,

    /// Display name.
    pub full_name: String,
}

impl TeamRef {
    /// Create a new team reference.
    #[must_use]
    pub fn new(id: TeamId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
        }
    }
}
