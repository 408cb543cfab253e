//! # card-rankings
//!
//! A leaderboard and statistics engine for trading card collections.
//!
//! ## Design Principles
//!
//! 1. **Pure Computation**: `compute_rankings` is a function of the input
//!    snapshot. No I/O, no caching, no mutation - callers re-invoke it
//!    whenever they hold fresh data.
//!
//! 2. **Deterministic**: Cards are processed in input order and every sort
//!    is stable, so ties resolve the same way on every run.
//!
//! 3. **Absent Means Excluded**: Unknown print runs and missing player or
//!    team references are valid data. A card silently drops out of the
//!    views keyed on the missing field; nothing here can fail.
//!
//! ## Modules
//!
//! - `catalog`: Card records, player/team references, ordered collection
//! - `ordering`: Total order over catalog card numbers
//! - `rankings`: The aggregation engine and its result types

pub mod catalog;
pub mod ordering;
pub mod rankings;

// Re-export commonly used types
pub use crate::catalog::{
    CardCollection, CardId, CardRecord, PlayerId, PlayerRef, TeamId, TeamRef,
};

pub use crate::ordering::{compare_card_numbers, is_special_code, ParsedCardNumber};

pub use crate::rankings::{
    compute_rankings, compute_rankings_with_config, CountEntry, Leaderboard, NationalityEntry,
    PrintAverageEntry, PrintExtremes, PrintTotalEntry, RankingConfig, RankingSet, SummaryStats,
};
