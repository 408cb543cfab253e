//! The ranking engine.
//!
//! One pass over the snapshot feeds a set of grouping accumulators; each
//! leaderboard is then a stable sort over its accumulator's rows. Groups
//! are keyed by numeric entity id (nationality is keyed by its label) and
//! rows are created in first-encountered order, so descending stable
//! sorts break ties toward the entity seen first. That makes the whole
//! computation a pure function of the input sequence: same cards in the
//! same order, same output.
//!
//! ## Eligibility
//!
//! - Count views: the keyed entity must be present on the card.
//! - Print-sum views (per player, per team, per nationality): the card
//!   must also carry a known, strictly positive print run.
//! - Average views: additionally, the entity needs at least
//!   `min_cards_for_average` counted cards.

use std::hash::Hash;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::config::RankingConfig;
use super::entries::{CountEntry, NationalityEntry, PrintAverageEntry, PrintTotalEntry};
use super::extremes::PrintExtremes;
use super::summary::SummaryStats;
use super::{div_round_half_up, Leaderboard};
use crate::catalog::{CardRecord, PlayerId, TeamId};

/// Every derived leaderboard view for one snapshot of the collection.
///
/// Produced by [`compute_rankings`]; plain data with no presentation
/// concerns attached.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingSet {
    /// Collection-wide statistics; `None` for an empty snapshot.
    pub summary: Option<SummaryStats>,

    /// Players by card appearances.
    pub player_counts: Leaderboard<CountEntry<PlayerId>>,

    /// Teams by card appearances.
    pub team_counts: Leaderboard<CountEntry<TeamId>>,

    /// Players by summed print runs.
    pub player_print_totals: Leaderboard<PrintTotalEntry<PlayerId>>,

    /// Players by average print run.
    pub player_print_averages: Leaderboard<PrintAverageEntry<PlayerId>>,

    /// Teams by average print run.
    pub team_print_averages: Leaderboard<PrintAverageEntry<TeamId>>,

    /// Highest and lowest single-card print runs.
    pub print_extremes: PrintExtremes,

    /// Nationalities by summed print runs. Never capped.
    pub nationality_print_totals: Vec<NationalityEntry>,
}

/// Compute every leaderboard view with the default configuration.
///
/// Pure and synchronous: no I/O, no mutation of the input, and the same
/// input always yields the same output.
///
/// ## Example
///
/// ```
/// use card_rankings::catalog::{CardId, CardRecord, PlayerId, PlayerRef};
/// use card_rankings::rankings::compute_rankings;
///
/// let ohtani = PlayerRef::new(PlayerId::new(9), "Shohei Ohtani");
/// let cards = vec![
///     CardRecord::new(CardId::new(1), "1").with_total_print(100).with_player(ohtani.clone()),
///     CardRecord::new(CardId::new(2), "2").with_total_print(300).with_player(ohtani.clone()),
///     CardRecord::new(CardId::new(3), "3").with_player(ohtani),
/// ];
///
/// let rankings = compute_rankings(&cards);
/// assert_eq!(rankings.player_counts[0].count, 3);
/// assert_eq!(rankings.player_print_averages[0].avg_print, 200);
/// ```
#[must_use]
pub fn compute_rankings(cards: &[CardRecord]) -> RankingSet {
    compute_rankings_with_config(cards, &RankingConfig::default())
}

/// Compute every leaderboard view with an explicit configuration.
#[must_use]
pub fn compute_rankings_with_config(cards: &[CardRecord], config: &RankingConfig) -> RankingSet {
    let mut player_counts: Grouper<PlayerId, CountEntry<PlayerId>> = Grouper::new();
    let mut team_counts: Grouper<TeamId, CountEntry<TeamId>> = Grouper::new();
    let mut player_prints: Grouper<PlayerId, PrintTotalEntry<PlayerId>> = Grouper::new();
    let mut team_prints: Grouper<TeamId, PrintTotalEntry<TeamId>> = Grouper::new();
    let mut nationality_prints: Grouper<String, NationalityAcc> = Grouper::new();

    for card in cards {
        if let Some(player) = &card.player {
            let row = player_counts.row(&player.id, || CountEntry {
                id: player.id,
                name: player.full_name.clone(),
                count: 0,
            });
            row.count += 1;
        }

        if let Some(team) = &card.team {
            let row = team_counts.row(&team.id, || CountEntry {
                id: team.id,
                name: team.full_name.clone(),
                count: 0,
            });
            row.count += 1;
        }

        let Some(print) = card.positive_print() else {
            continue;
        };
        let print = u64::from(print);

        if let Some(player) = &card.player {
            let row = player_prints.row(&player.id, || PrintTotalEntry {
                id: player.id,
                name: player.full_name.clone(),
                total_print: 0,
                card_count: 0,
            });
            row.total_print += print;
            row.card_count += 1;

            if let Some(nationality) = &player.nationality {
                let row = nationality_prints.row(nationality, || NationalityAcc {
                    nationality: nationality.clone(),
                    total_print: 0,
                    card_count: 0,
                });
                row.total_print += print;
                row.card_count += 1;
            }
        }

        if let Some(team) = &card.team {
            let row = team_prints.row(&team.id, || PrintTotalEntry {
                id: team.id,
                name: team.full_name.clone(),
                total_print: 0,
                card_count: 0,
            });
            row.total_print += print;
            row.card_count += 1;
        }
    }

    let limit = config.leaderboard_size;
    let player_print_rows = player_prints.into_rows();

    let mut nationality_print_totals: Vec<NationalityEntry> = nationality_prints
        .into_rows()
        .into_iter()
        .map(|acc| NationalityEntry {
            avg_print: div_round_half_up(acc.total_print, acc.card_count as u64),
            nationality: acc.nationality,
            total_print: acc.total_print,
            card_count: acc.card_count,
        })
        .collect();
    nationality_print_totals.sort_by(|a, b| b.total_print.cmp(&a.total_print));

    RankingSet {
        summary: SummaryStats::compute(cards),
        player_counts: top(player_counts.into_rows(), limit, |e| e.count),
        team_counts: top(team_counts.into_rows(), limit, |e| e.count),
        player_print_totals: top(player_print_rows.clone(), limit, |e| e.total_print),
        player_print_averages: averages(player_print_rows, config),
        team_print_averages: averages(team_prints.into_rows(), config),
        print_extremes: PrintExtremes::compute(cards, limit),
        nationality_print_totals,
    }
}

/// Stable descending sort by `key`, capped at `limit`.
fn top<T, K: Ord>(mut rows: Vec<T>, limit: usize, key: impl Fn(&T) -> K) -> Leaderboard<T> {
    rows.sort_by(|a, b| key(b).cmp(&key(a)));
    rows.truncate(limit);
    rows.into_iter().collect()
}

/// Derive the average-print leaderboard from per-entity totals.
fn averages<Id: Copy>(
    totals: Vec<PrintTotalEntry<Id>>,
    config: &RankingConfig,
) -> Leaderboard<PrintAverageEntry<Id>> {
    let rows: Vec<PrintAverageEntry<Id>> = totals
        .into_iter()
        .filter(|t| t.card_count >= config.min_cards_for_average)
        .map(|t| PrintAverageEntry {
            id: t.id,
            avg_print: div_round_half_up(t.total_print, t.card_count as u64),
            name: t.name,
            total_print: t.total_print,
            card_count: t.card_count,
        })
        .collect();
    top(rows, config.leaderboard_size, |e| e.avg_print)
}

/// Nationality accumulator; the average is filled in once totals settle.
struct NationalityAcc {
    nationality: String,
    total_print: u64,
    card_count: usize,
}

/// Grouping accumulator that preserves first-encountered row order.
///
/// Rows live in a `Vec` so the downstream stable sorts see entities in the
/// order the input introduced them; the map only carries indices.
struct Grouper<K, V> {
    rows: Vec<V>,
    index: FxHashMap<K, usize>,
}

impl<K: Eq + Hash + Clone, V> Grouper<K, V> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Get the row for `key`, inserting `init()` on first sight.
    fn row(&mut self, key: &K, init: impl FnOnce() -> V) -> &mut V {
        if let Some(&i) = self.index.get(key) {
            &mut self.rows[i]
        } else {
            self.index.insert(key.clone(), self.rows.len());
            self.rows.push(init());
            self.rows.last_mut().unwrap()
        }
    }

    /// Consume the accumulator, yielding rows in first-encountered order.
    fn into_rows(self) -> Vec<V> {
        self.rows
    }
}
