//! Leaderboard aggregation over a card snapshot.
//!
//! ## Key Types
//!
//! - `RankingSet`: Every derived view for one snapshot
//! - `SummaryStats`: Collection-wide print statistics
//! - `CountEntry` / `PrintTotalEntry` / `PrintAverageEntry` /
//!   `NationalityEntry`: Leaderboard rows
//! - `PrintExtremes`: Highest and lowest single-card print runs
//! - `RankingConfig`: Leaderboard size and average-eligibility floor
//!
//! ## Model
//!
//! `compute_rankings` is a pure function of the input slice. Nothing is
//! cached or updated incrementally; callers re-invoke it whenever they
//! hold a fresh snapshot. The same input always produces the same output,
//! down to tie order.

use smallvec::SmallVec;

pub mod config;
pub mod engine;
pub mod entries;
pub mod extremes;
pub mod summary;

pub use config::RankingConfig;
pub use engine::{compute_rankings, compute_rankings_with_config, RankingSet};
pub use entries::{CountEntry, NationalityEntry, PrintAverageEntry, PrintTotalEntry};
pub use extremes::PrintExtremes;
pub use summary::SummaryStats;

/// Bounded leaderboard list. Stays inline at the usual 10-entry size.
pub type Leaderboard<T> = SmallVec<[T; 10]>;

/// Integer division rounded half-up, for non-negative operands.
///
/// `count` must be non-zero; averages are only taken over groups with at
/// least one contributing card.
pub(crate) fn div_round_half_up(sum: u64, count: u64) -> u64 {
    (2 * sum + count) / (2 * count)
}
