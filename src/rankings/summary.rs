//! Collection-wide print statistics.

use serde::{Deserialize, Serialize};

use super::div_round_half_up;
use crate::catalog::CardRecord;

/// Summary statistics over one snapshot of the collection.
///
/// The mean runs over every card with a known print run (a recorded zero
/// counts here, unlike in the per-entity leaderboards). `max_print_card`
/// and `min_print_card` are the earliest cards attaining the extremes
/// among known-print cards; when exactly one card has a known print run,
/// both point at that card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Total cards in the snapshot, known print run or not.
    pub total_cards: usize,

    /// Mean print run over cards where it is known, rounded half-up.
    /// Zero when no card has a known print run.
    pub avg_print: u64,

    /// Card with the highest known print run.
    pub max_print_card: Option<CardRecord>,

    /// Card with the lowest known print run.
    pub min_print_card: Option<CardRecord>,
}

impl SummaryStats {
    /// Compute summary statistics for a snapshot.
    ///
    /// Returns `None` for an empty snapshot - "no data" is observable and
    /// distinct from a zeroed result.
    #[must_use]
    pub fn compute(cards: &[CardRecord]) -> Option<Self> {
        if cards.is_empty() {
            return None;
        }

        let mut sum: u64 = 0;
        let mut known: u64 = 0;
        let mut max: Option<(u32, &CardRecord)> = None;
        let mut min: Option<(u32, &CardRecord)> = None;

        for card in cards {
            let Some(print) = card.total_print else {
                continue;
            };
            sum += u64::from(print);
            known += 1;

            // Strict comparisons keep the earliest card on ties.
            if max.map_or(true, |(p, _)| print > p) {
                max = Some((print, card));
            }
            if min.map_or(true, |(p, _)| print < p) {
                min = Some((print, card));
            }
        }

        let avg_print = if known > 0 {
            div_round_half_up(sum, known)
        } else {
            0
        };

        Some(Self {
            total_cards: cards.len(),
            avg_print,
            max_print_card: max.map(|(_, c)| c.clone()),
            min_print_card: min.map(|(_, c)| c.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CardId;

    fn card(id: u32, print: Option<u32>) -> CardRecord {
        let record = CardRecord::new(CardId::new(id), id.to_string());
        match print {
            Some(p) => record.with_total_print(p),
            None => record,
        }
    }

    #[test]
    fn test_empty_snapshot() {
        assert_eq!(SummaryStats::compute(&[]), None);
    }

    #[test]
    fn test_no_known_prints() {
        let cards = vec![card(1, None), card(2, None)];
        let stats = SummaryStats::compute(&cards).unwrap();

        assert_eq!(stats.total_cards, 2);
        assert_eq!(stats.avg_print, 0);
        assert_eq!(stats.max_print_card, None);
        assert_eq!(stats.min_print_card, None);
    }

    #[test]
    fn test_mean_skips_unknown() {
        let cards = vec![card(1, Some(100)), card(2, None), card(3, Some(301))];
        let stats = SummaryStats::compute(&cards).unwrap();

        assert_eq!(stats.total_cards, 3);
        assert_eq!(stats.avg_print, 201); // round(401 / 2) = round(200.5)
    }

    #[test]
    fn test_max_and_min_cards() {
        let cards = vec![card(1, Some(500)), card(2, Some(80)), card(3, Some(1_200))];
        let stats = SummaryStats::compute(&cards).unwrap();

        assert_eq!(stats.max_print_card.unwrap().id, CardId::new(3));
        assert_eq!(stats.min_print_card.unwrap().id, CardId::new(2));
    }

    #[test]
    fn test_single_known_print_is_both_extremes() {
        let cards = vec![card(1, None), card(2, Some(750)), card(3, None)];
        let stats = SummaryStats::compute(&cards).unwrap();

        assert_eq!(stats.max_print_card.as_ref().unwrap().id, CardId::new(2));
        assert_eq!(stats.min_print_card.as_ref().unwrap().id, CardId::new(2));
    }

    #[test]
    fn test_earliest_card_wins_ties() {
        let cards = vec![card(1, Some(400)), card(2, Some(400)), card(3, Some(400))];
        let stats = SummaryStats::compute(&cards).unwrap();

        assert_eq!(stats.max_print_card.unwrap().id, CardId::new(1));
        assert_eq!(stats.min_print_card.unwrap().id, CardId::new(1));
    }

    #[test]
    fn test_zero_print_counts_here() {
        // A recorded zero participates in the mean and can be the minimum.
        let cards = vec![card(1, Some(0)), card(2, Some(100))];
        let stats = SummaryStats::compute(&cards).unwrap();

        assert_eq!(stats.avg_print, 50);
        assert_eq!(stats.min_print_card.unwrap().id, CardId::new(1));
    }
}
