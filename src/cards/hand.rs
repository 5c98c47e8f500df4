//! A player's hand.
//!
//! Backed by `im::Vector` so handing a snapshot to the matching functions is
//! an O(1) clone. Order is draw order; it is kept for display but carries no
//! meaning for matching.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::core::entity::EntityId;
use crate::core::error::SynthError;

/// Ordered collection of undeployed cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vector<Card>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a drawn card to the end of the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push_back(card);
    }

    /// Add several cards in order.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        for card in cards {
            self.push(card);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Find a card by instance id.
    #[must_use]
    pub fn get(&self, id: EntityId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == id)
    }

    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Immutable snapshot for the matching functions.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Card> {
        self.cards.iter().cloned().collect()
    }

    /// Resolve a selection of ids to cards, in hand order.
    ///
    /// Fails if an id is not in the hand or appears twice.
    pub fn select(&self, ids: &[EntityId]) -> Result<Vec<Card>, SynthError> {
        let mut seen = FxHashSet::default();
        for &id in ids {
            if !seen.insert(id) {
                return Err(SynthError::DuplicateCard(id));
            }
            if !self.contains(id) {
                return Err(SynthError::CardNotInHand(id));
            }
        }

        Ok(self
            .cards
            .iter()
            .filter(|c| seen.contains(&c.id))
            .cloned()
            .collect())
    }

    /// Remove the given card instances. Ids not in the hand are skipped.
    ///
    /// Returns the removed cards in hand order.
    pub fn remove_all(&mut self, ids: &[EntityId]) -> Vec<Card> {
        let (removed, kept): (Vector<Card>, Vector<Card>) =
            self.cards.clone().into_iter().partition(|c| ids.contains(&c.id));
        self.cards = kept;
        removed.into_iter().collect()
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::token::{Condition, Element};

    fn sample_hand() -> Hand {
        Hand::from(vec![
            Card::element(EntityId(1), "水素", Element::H),
            Card::element(EntityId(2), "水素", Element::H),
            Card::element(EntityId(3), "酸素", Element::O),
            Card::condition(EntityId(4), "点火", Condition::Spark),
        ])
    }

    #[test]
    fn test_push_and_get() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());

        hand.push(Card::element(EntityId(9), "鉄", Element::Fe));
        assert_eq!(hand.len(), 1);
        assert_eq!(hand.get(EntityId(9)).unwrap().name, "鉄");
        assert!(hand.get(EntityId(10)).is_none());
    }

    #[test]
    fn test_select_keeps_hand_order() {
        let hand = sample_hand();
        let picked = hand.select(&[EntityId(4), EntityId(1)]).unwrap();
        let ids: Vec<_> = picked.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![EntityId(1), EntityId(4)]);
    }

    #[test]
    fn test_select_rejects_unknown_and_duplicate() {
        let hand = sample_hand();
        assert!(matches!(
            hand.select(&[EntityId(99)]),
            Err(SynthError::CardNotInHand(EntityId(99)))
        ));
        assert!(matches!(
            hand.select(&[EntityId(1), EntityId(1)]),
            Err(SynthError::DuplicateCard(EntityId(1)))
        ));
    }

    #[test]
    fn test_remove_all_removes_only_named_instances() {
        let mut hand = sample_hand();
        let removed = hand.remove_all(&[EntityId(1), EntityId(3)]);

        assert_eq!(removed.len(), 2);
        assert_eq!(hand.len(), 2);
        assert!(hand.contains(EntityId(2)), "other H instance must stay");
        assert!(!hand.contains(EntityId(1)));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut hand = sample_hand();
        let snapshot = hand.snapshot();
        hand.remove_all(&[EntityId(1)]);
        assert_eq!(snapshot.len(), 4);
        assert_eq!(hand.len(), 3);
    }
}
