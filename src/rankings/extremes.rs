//! Extremal single-card print runs.

use serde::{Deserialize, Serialize};

use crate::catalog::CardRecord;

/// The scarcest and most-printed individual cards.
///
/// Only cards with a known, strictly positive print run qualify. With
/// fewer qualifying cards than the leaderboard size, the two lists
/// overlap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintExtremes {
    /// Highest print runs, descending.
    pub max_print_cards: Vec<CardRecord>,

    /// Lowest print runs, ascending.
    pub min_print_cards: Vec<CardRecord>,
}

impl PrintExtremes {
    /// Compute the extremal lists for a snapshot.
    #[must_use]
    pub fn compute(cards: &[CardRecord], limit: usize) -> Self {
        let mut with_print: Vec<(u32, &CardRecord)> = cards
            .iter()
            .filter_map(|c| c.positive_print().map(|p| (p, c)))
            .collect();
        with_print.sort_by(|a, b| b.0.cmp(&a.0));

        let max_print_cards = with_print
            .iter()
            .take(limit)
            .map(|(_, c)| (*c).clone())
            .collect();

        let tail_start = with_print.len().saturating_sub(limit);
        let min_print_cards = with_print[tail_start..]
            .iter()
            .rev()
            .map(|(_, c)| (*c).clone())
            .collect();

        Self {
            max_print_cards,
            min_print_cards,
        }
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

    fn ids(cards: &[CardRecord]) -> Vec<u32> {
        cards.iter().map(|c| c.id.raw()).collect()
    }

    #[test]
    fn test_empty_input() {
        let extremes = PrintExtremes::compute(&[], 10);
        assert!(extremes.max_print_cards.is_empty());
        assert!(extremes.min_print_cards.is_empty());
    }

    #[test]
    fn test_zero_and_unknown_excluded() {
        let cards = vec![card(1, Some(0)), card(2, None), card(3, Some(100))];
        let extremes = PrintExtremes::compute(&cards, 10);

        assert_eq!(ids(&extremes.max_print_cards), vec![3]);
        assert_eq!(ids(&extremes.min_print_cards), vec![3]);
    }

    #[test]
    fn test_max_descending_min_ascending() {
        let cards: Vec<_> = [(1, 500), (2, 80), (3, 1_200), (4, 300)]
            .iter()
            .map(|&(id, p)| card(id, Some(p)))
            .collect();
        let extremes = PrintExtremes::compute(&cards, 2);

        assert_eq!(ids(&extremes.max_print_cards), vec![3, 1]);
        assert_eq!(ids(&extremes.min_print_cards), vec![2, 4]);
    }

    #[test]
    fn test_overlap_below_limit() {
        let cards = vec![card(1, Some(10)), card(2, Some(20))];
        let extremes = PrintExtremes::compute(&cards, 10);

        assert_eq!(ids(&extremes.max_print_cards), vec![2, 1]);
        assert_eq!(ids(&extremes.min_print_cards), vec![1, 2]);
    }

    #[test]
    fn test_max_ties_keep_input_order() {
        let cards = vec![card(1, Some(100)), card(2, Some(100)), card(3, Some(50))];
        let extremes = PrintExtremes::compute(&cards, 2);

        assert_eq!(ids(&extremes.max_print_cards), vec![1, 2]);
    }
}
