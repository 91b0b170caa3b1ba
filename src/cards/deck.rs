//! Tier decks and their visible window.
//!
//! Each tier keeps one ordered sequence. The first `window` cards are
//! face-up and choosable, the rest form the face-down draw pile. When a
//! face-up card leaves, the next face-down card takes its slot; once the
//! pile is exhausted the window just shrinks.

use im::Vector;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::definition::{Card, CardId, Tier};

/// Remaining cards of one tier, face-up window first.
///
/// Backed by `im::Vector` so copying a deck into a new game state
/// shares structure with the old one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDeck {
    tier: Tier,
    cards: Vector<Card>,
}

impl TierDeck {
    /// Create a deck from an ordered card sequence.
    #[must_use]
    pub fn new(tier: Tier, cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            tier,
            cards: cards.into_iter().collect(),
        }
    }

    /// The tier this deck holds.
    #[must_use]
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Total remaining cards (visible + hidden).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards remain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Face-up cards.
    pub fn visible(&self, window: usize) -> impl Iterator<Item = &Card> {
        self.cards.iter().take(window)
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn visible_count(&self, window: usize) -> usize {
        self.cards.len().min(window)
    }

    /// Number of face-down cards.
    #[must_use]
    pub fn hidden_count(&self, window: usize) -> usize {
        self.cards.len().saturating_sub(window)
    }

    /// Window slot holding the card, if it is face-up.
    #[must_use]
    pub fn visible_position(&self, id: CardId, window: usize) -> Option<usize> {
        self.visible(window).position(|c| c.id == id)
    }

    /// All remaining cards in order, face-up first.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Remove a face-up card and backfill its slot from the pile.
    ///
    /// The replacement keeps the removed card's slot so the rest of the
    /// window does not shift. Returns `None` if the card is not face-up.
    pub fn take_visible(&mut self, id: CardId, window: usize) -> Option<Card> {
        let slot = self.visible_position(id, window)?;
        if self.cards.len() > window {
            let replacement = self.cards.remove(window);
            Some(self.cards.set(slot, replacement))
        } else {
            Some(self.cards.remove(slot))
        }
    }
}

/// One deck per tier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decks {
    decks: [TierDeck; 3],
}

impl Decks {
    /// Split an ordered card sequence into tier decks, preserving order.
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut decks = Self::empty();
        for card in cards {
            decks.decks[card.tier.index()].cards.push_back(card);
        }
        decks
    }

    /// Three empty decks.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            decks: Tier::ALL.map(|tier| TierDeck::new(tier, [])),
        }
    }

    /// Total remaining cards across tiers.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.decks.iter().map(TierDeck::len).sum()
    }

    /// Iterate over tier decks, lowest tier first.
    pub fn iter(&self) -> impl Iterator<Item = &TierDeck> {
        self.decks.iter()
    }
}

impl Index<Tier> for Decks {
    type Output = TierDeck;

    fn index(&self, tier: Tier) -> &Self::Output {
        &self.decks[tier.index()]
    }
}

impl IndexMut<Tier> for Decks {
    fn index_mut(&mut self, tier: Tier) -> &mut Self::Output {
        &mut self.decks[tier.index()]
    }
}
