//! Catalog records and the collection container.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card records
//! - `CardRecord`: One catalog entry (number, title, print run, player, team)
//! - `PlayerRef` / `TeamRef`: Lightweight entity references carried on cards
//! - `CardCollection`: Insertion-ordered snapshot with id lookup
//!
//! ## Optional Fields
//!
//! Print run, player, and team may all be absent. Absence means "unknown"
//! or "not applicable" and silently excludes the card from the derived
//! views keyed on the missing field.

pub mod card;
pub mod collection;
pub mod player;
pub mod team;

pub use card::{CardId, CardRecord};
pub use collection::CardCollection;
pub use player::{PlayerId, PlayerRef};
pub use team::{TeamId, TeamRef};
