//! Player references.
//!
//! A card may name the player it depicts. The collection only carries a
//! lightweight reference - id, display name, and an optional nationality
//! label - not full player records; those live upstream.

use serde::{Deserialize, Serialize};

/// Unique identifier for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
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

impl From<u32> for PlayerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Player reference carried on a card.
///
/// Rankings group by `id`, never by `full_name` - two players can share a
/// display name.
///
/// ## Example
///
/// ```
/// use card_rankings::catalog::{PlayerId, PlayerRef};
///
/// let player = PlayerRef::new(PlayerId::new(9), "Shohei Ohtani")
///     .with_nationality("Japan");
///
/// assert_eq!(player.nationality.as_deref(), Some("Japan"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    /// Unique player identifier (the grouping key).
    pub id: PlayerId,

    /// Display name.
    pub full_name: String,

    /// Free-text country/region label, when known.
    pub nationality: Option<String>,
}

impl PlayerRef {
    /// Create a new player reference with no nationality.
    #[must_use]
    pub fn new(id: PlayerId, full_name: impl Into<String>) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            nationality: None,
        }
    }

    /// Set the nationality label (builder pattern).
    #[must_use]
    pub fn with_nationality(mut self, nationality: impl Into<String>) -> Self {
        self.nationality = Some(nationality.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id() {
        let id = PlayerId::new(9);
        assert_eq!(id.raw(), 9);
        assert_eq!(format!("{}", id), "Player(9)");
    }

    #[test]
    fn test_player_ref_builder() {
        let player = PlayerRef::new(PlayerId::new(1), "Mike Trout").with_nationality("USA");

        assert_eq!(player.id, PlayerId::new(1));
        assert_eq!(player.full_name, "Mike Trout");
        assert_eq!(player.nationality.as_deref(), Some("USA"));
    }

    #[test]
    fn test_player_ref_no_nationality() {
        let player = PlayerRef::new(PlayerId::new(2), "Unknown Rookie");
        assert_eq!(player.nationality, None);
    }

    #[test]
    fn test_player_ref_serialization() {
        let player = PlayerRef::new(PlayerId::new(9), "Shohei Ohtani").with_nationality("Japan");

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: PlayerRef = serde_json::from_str(&json).unwrap();

        assert_eq!(player, deserialized);
    }
}
