//! Ordered card sequence with a cached count.
//!
//! The count is derived, never stored independently: every mutation
//! re-syncs it (and card positions) from the sequence, and deserialization
//! recomputes both instead of trusting the stored values.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};
use crate::core::rng::GameRng;

/// Cards in one zone, front first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BucketRepr")]
pub struct ZoneBucket {
    cards: Vector<Card>,
    count: usize,
}

/// Wire form; the stored count is read and discarded.
#[derive(Deserialize)]
struct BucketRepr {
    cards: Vector<Card>,
    #[serde(default)]
    #[allow(dead_code)]
    count: usize,
}

impl From<BucketRepr> for ZoneBucket {
    fn from(repr: BucketRepr) -> Self {
        Self::from_cards(repr.cards)
    }
}

impl ZoneBucket {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bucket from cards in order.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        let mut bucket = Self {
            cards: cards.into_iter().collect(),
            count: 0,
        };
        bucket.sync();
        bucket
    }

    /// Cached card count. Always equal to `len()`.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn front(&self) -> Option<&Card> {
        self.cards.front()
    }

    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index_of(id).is_some()
    }

    #[must_use]
    pub fn index_of(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == id)
    }

    /// Card ids in order.
    pub fn ids(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter().map(|c| &c.id)
    }

    /// Append a card at the back.
    pub fn push_back(&mut self, card: Card) {
        self.cards.push_back(card);
        self.sync();
    }

    /// Remove up to `n` cards from the front.
    pub fn take_front(&mut self, n: usize) -> Vec<Card> {
        let n = n.min(self.cards.len());
        let rest = self.cards.split_off(n);
        let taken = std::mem::replace(&mut self.cards, rest);
        self.sync();
        taken.into_iter().collect()
    }

    /// Remove every card.
    pub fn take_all(&mut self) -> Vec<Card> {
        let taken = std::mem::take(&mut self.cards);
        self.sync();
        taken.into_iter().collect()
    }

    /// Remove a card by id.
    pub fn remove(&mut self, id: &CardId) -> Option<Card> {
        let index = self.index_of(id)?;
        let card = self.cards.remove(index);
        self.sync();
        Some(card)
    }

    /// Shuffle the sequence in place. Cards keep their zone and visibility.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        let len = self.cards.len();
        let cards = &mut self.cards;
        rng.shuffle_by(len, |i, j| cards.swap(i, j));
        self.sync();
    }

    fn sync(&mut self) {
        self.count = self.cards.len();
        for (position, card) in self.cards.iter_mut().enumerate() {
            card.position = position;
        }
    }
}
