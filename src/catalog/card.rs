//! Card records - one catalog entry per collectible card.
//!
//! `CardRecord` is read-only input owned by the upstream data store. The
//! engine never mutates records; every derived view is rebuilt from scratch.
//!
//! Optional fields (`total_print`, `player`, `team`) represent "unknown" or
//! "not applicable". A missing field excludes the card from the views keyed
//! on it; it is normal data, not an error.

use serde::{Deserialize, Serialize};

use super::player::PlayerRef;
use super::team::TeamRef;

/// Unique identifier for a card record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
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

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// One catalog entry for a collectible trading card.
///
/// A card has at most one player and at most one team; team-set cards carry
/// neither. `total_print` is the print run - the number of physical copies
/// issued - and is `None` when the figure was never published.
///
/// ## Example
///
/// ```
/// use card_rankings::catalog::{CardId, CardRecord, PlayerId, PlayerRef};
///
/// let card = CardRecord::new(CardId::new(1), "OD-12")
///     .with_title("Walk-off grand slam")
///     .with_total_print(1_532)
///     .with_player(PlayerRef::new(PlayerId::new(9), "Shohei Ohtani"));
///
/// assert_eq!(card.total_print, Some(1_532));
/// assert!(card.team.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// Unique identifier for this record.
    pub id: CardId,

    /// Product catalog code ("57", "OD-12", "B", "TS-3", ...).
    pub card_number: String,

    /// Display caption (may be empty).
    pub title: String,

    /// Print run - copies issued. `None` when unknown.
    pub total_print: Option<u32>,

    /// Player depicted, if any.
    pub player: Option<PlayerRef>,

    /// Team featured, if any.
    pub team: Option<TeamRef>,
}

impl CardRecord {
    /// Create a new card record with no print run, player, or team.
    #[must_use]
    pub fn new(id: CardId, card_number: impl Into<String>) -> Self {
        Self {
            id,
            card_number: card_number.into(),
            title: String::new(),
            total_print: None,
            player: None,
            team: None,
        }
    }

    /// Set the display caption (builder pattern).
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the print run (builder pattern).
    #[must_use]
    pub fn with_total_print(mut self, total_print: u32) -> Self {
        self.total_print = Some(total_print);
        self
    }

    /// Set the depicted player (builder pattern).
    #[must_use]
    pub fn with_player(mut self, player: PlayerRef) -> Self {
        self.player = Some(player);
        self
    }

    /// Set the featured team (builder pattern).
    #[must_use]
    pub fn with_team(mut self, team: TeamRef) -> Self {
        self.team = Some(team);
        self
    }

    /// Print run when known and strictly positive.
    ///
    /// Leaderboards that sum or rank print runs only admit cards with a
    /// real, positive figure; a recorded zero counts as unknown there.
    #[must_use]
    pub fn positive_print(&self) -> Option<u32> {
        self.total_print.filter(|&p| p > 0)
    }

    /// Nationality of the depicted player, when both are known.
    #[must_use]
    pub fn player_nationality(&self) -> Option<&str> {
        self.player.as_ref()?.nationality.as_deref()
    }
}
