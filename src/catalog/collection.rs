//! Insertion-ordered card collection with id lookup.
//!
//! `CardCollection` holds one realized snapshot of the catalog. Insertion
//! order is preserved because it is observable: count leaderboards break
//! ties by first-encountered entity, so the engine must see cards in the
//! order the upstream store supplied them.

use rustc_hash::FxHashMap;

use super::card::{CardId, CardRecord};
use crate::ordering::compare_card_numbers;
use crate::rankings::{compute_rankings, RankingSet};

/// Ordered collection of card records.
///
/// Provides id lookup and iteration in insertion order.
///
/// ## Example
///
/// ```
/// use card_rankings::catalog::{CardCollection, CardId, CardRecord};
///
/// let mut collection = CardCollection::new();
/// collection.add(CardRecord::new(CardId::new(1), "12").with_total_print(800));
/// collection.add(CardRecord::new(CardId::new(2), "3"));
///
/// let found = collection.get(CardId::new(1)).unwrap();
/// assert_eq!(found.total_print, Some(800));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCollection {
    cards: Vec<CardRecord>,
    index: FxHashMap<CardId, usize>,
}

impl CardCollection {
    /// Create a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card record.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn add(&mut self, card: CardRecord) {
        if self.index.contains_key(&card.id) {
            panic!("Card with ID {:?} already in collection", card.id);
        }
        self.index.insert(card.id, self.cards.len());
        self.cards.push(card);
    }

    /// Get a card record by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardRecord> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Check if a card ID is present.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.cards.iter()
    }

    /// View the cards as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[CardRecord] {
        &self.cards
    }

    /// Find cards matching a predicate, in insertion order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardRecord>
    where
        F: Fn(&CardRecord) -> bool,
    {
        self.cards.iter().filter(move |c| predicate(c))
    }

    /// Cards sorted by catalog number (the default display order).
    ///
    /// Stable, so cards sharing a catalog number keep insertion order.
    #[must_use]
    pub fn sorted_by_number(&self) -> Vec<&CardRecord> {
        let mut sorted: Vec<&CardRecord> = self.cards.iter().collect();
        sorted.sort_by(|a, b| compare_card_numbers(&a.card_number, &b.card_number));
        sorted
    }

    /// Compute every leaderboard view for the current snapshot.
    ///
    /// Equivalent to `compute_rankings(collection.as_slice())`.
    #[must_use]
    pub fn rankings(&self) -> RankingSet {
        compute_rankings(&self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: u32, number: &str) -> CardRecord {
        CardRecord::new(CardId::new(id), number)
    }

    #[test]
    fn test_add_and_get() {
        let mut collection = CardCollection::new();
        collection.add(card(1, "12"));

        let found = collection.get(CardId::new(1));
        assert!(found.is_some());
        assert_eq!(found.unwrap().card_number, "12");

        assert!(collection.get(CardId::new(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "already in collection")]
    fn test_duplicate_id_panics() {
        let mut collection = CardCollection::new();
        collection.add(card(1, "12"));
        collection.add(card(1, "13")); // Should panic
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut collection = CardCollection::new();
        collection.add(card(3, "30"));
        collection.add(card(1, "10"));
        collection.add(card(2, "20"));

        let numbers: Vec<_> = collection.iter().map(|c| c.card_number.as_str()).collect();
        assert_eq!(numbers, vec!["30", "10", "20"]);
    }

    #[test]
    fn test_contains_and_len() {
        let mut collection = CardCollection::new();
        assert!(collection.is_empty());

        collection.add(card(1, "1"));
        collection.add(card(2, "2"));

        assert_eq!(collection.len(), 2);
        assert!(!collection.is_empty());
        assert!(collection.contains(CardId::new(1)));
        assert!(!collection.contains(CardId::new(3)));
    }

    #[test]
    fn test_find_with_predicate() {
        let mut collection = CardCollection::new();
        collection.add(card(1, "1").with_total_print(100));
        collection.add(card(2, "2"));
        collection.add(card(3, "3").with_total_print(300));

        let with_print: Vec<_> = collection.find(|c| c.total_print.is_some()).collect();
        assert_eq!(with_print.len(), 2);
    }

    #[test]
    fn test_sorted_by_number() {
        let mut collection = CardCollection::new();
        collection.add(card(1, "TS-1"));
        collection.add(card(2, "10"));
        collection.add(card(3, "A-2"));
        collection.add(card(4, "2"));

        let numbers: Vec<_> = collection
            .sorted_by_number()
            .iter()
            .map(|c| c.card_number.as_str())
            .collect();
        assert_eq!(numbers, vec!["2", "10", "A-2", "TS-1"]);
    }
}
