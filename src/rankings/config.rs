//! Ranking configuration parameters.

use serde::{Deserialize, Serialize};

/// Ranking configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingConfig {
    /// Maximum entries kept in each bounded leaderboard (default: 10).
    /// The nationality view is never capped.
    pub leaderboard_size: usize,

    /// Minimum cards with a counted print run before an entity is
    /// eligible for the average-print leaderboards (default: 2).
    /// A single short-printed card would otherwise dominate the averages.
    pub min_cards_for_average: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            leaderboard_size: 10,
            min_cards_for_average: 2,
        }
    }
}

impl RankingConfig {
    /// Create a new config with a custom leaderboard size.
    pub fn with_leaderboard_size(mut self, size: usize) -> Self {
        self.leaderboard_size = size;
        self
    }

    /// Create a new config with a custom average-eligibility floor.
    pub fn with_min_cards_for_average(mut self, min: usize) -> Self {
        self.min_cards_for_average = min;
        self
    }
}
