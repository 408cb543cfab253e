//! Leaderboard row types.
//!
//! Rows carry plain data only - no formatting, localization, or
//! truncation; that is the caller's concern. Each row keeps the entity's
//! numeric id alongside its display name because grouping is by id - two
//! entities may share a name.

use serde::{Deserialize, Serialize};

/// Leaderboard row counting card appearances for one entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry<Id> {
    /// Entity identifier (the grouping key).
    pub id: Id,

    /// Display name at time of aggregation.
    pub name: String,

    /// Number of cards referencing this entity.
    pub count: usize,
}

/// Leaderboard row summing print runs for one entity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintTotalEntry<Id> {
    /// Entity identifier (the grouping key).
    pub id: Id,

    /// Display name at time of aggregation.
    pub name: String,

    /// Sum of print runs over counted cards.
    pub total_print: u64,

    /// Number of counted cards (known positive print run only).
    pub card_count: usize,
}

/// Leaderboard row ranking entities by average print run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintAverageEntry<Id> {
    /// Entity identifier (the grouping key).
    pub id: Id,

    /// Display name at time of aggregation.
    pub name: String,

    /// Sum of print runs over counted cards.
    pub total_print: u64,

    /// Number of counted cards.
    pub card_count: usize,

    /// `total_print / card_count`, rounded half-up.
    pub avg_print: u64,
}

/// Print totals for all cards of players from one country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NationalityEntry {
    /// Free-text nationality label (the grouping key).
    pub nationality: String,

    /// Sum of print runs over counted cards.
    pub total_print: u64,

    /// Number of counted cards.
    pub card_count: usize,

    /// `total_print / card_count`, rounded half-up.
    pub avg_print: u64,
}
