//! Legal zone transitions.
//!
//! `ZoneRules` applies the game's capacity and pacing rules on top of the
//! raw transfers of `PlayerCardState`. Every transition is total: requests
//! that exceed a limit are truncated, requests that are not allowed at all
//! move nothing. None of them can fail.
//!
//! ## Turn shape
//!
//! ```text
//! DECK --draw--> HAND --play--> ACTIVE --resolve--> DISCARD
//!   ^                                                  |
//!   +-------------------- recycle ---------------------+
//! ```
//!
//! Drawing is locked while ACTIVE holds cards, and the first card of a turn
//! may only be played from a full hand.

use crate::cards::CardId;
use crate::core::config::EngineConfig;
use crate::core::rng::GameRng;
use crate::zones::{MovedCards, PlayerCardState, Zone};

/// Capacity limits and the transitions that respect them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneRules {
    pub max_hand_cards: usize,
    pub max_active_cards: usize,
}

impl Default for ZoneRules {
    fn default() -> Self {
        Self::from_config(&EngineConfig::default())
    }
}

impl ZoneRules {
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            max_hand_cards: config.max_hand_cards,
            max_active_cards: config.max_active_cards,
        }
    }

    /// Opening sequence for a fresh state: build the deck, shuffle, fill
    /// the hand. Returns the cards drawn.
    pub fn deal_opening_hand(&self, state: &mut PlayerCardState, rng: &mut GameRng) -> MovedCards {
        self.create_initial_deck(state, rng);
        self.draw(state, rng, self.max_hand_cards)
    }

    /// Rebuild the character pool into DECK and shuffle it.
    pub fn create_initial_deck(&self, state: &mut PlayerCardState, rng: &mut GameRng) {
        state.rebuild_pool();
        state.shuffle(Zone::Deck, rng);
    }

    /// Shuffle DECK. Nothing changes zone or visibility.
    pub fn shuffle_deck(&self, state: &mut PlayerCardState, rng: &mut GameRng) {
        state.shuffle(Zone::Deck, rng);
    }

    // === Drawing ===

    /// ACTIVE is empty and the hand has room.
    #[must_use]
    pub fn can_draw(&self, state: &PlayerCardState) -> bool {
        state.zone(Zone::Active).is_empty() && state.count(Zone::Hand) < self.max_hand_cards
    }

    /// Draw up to `count` cards from the front of DECK.
    ///
    /// Truncated to the room left in hand. Recycles DISCARD first when DECK
    /// is empty. Draws nothing while drawing is locked.
    pub fn draw(&self, state: &mut PlayerCardState, rng: &mut GameRng, count: usize) -> MovedCards {
        if !self.can_draw(state) {
            return MovedCards::new();
        }

        let room = self.max_hand_cards - state.count(Zone::Hand);
        let count = count.min(room);
        if count == 0 {
            return MovedCards::new();
        }

        if state.zone(Zone::Deck).is_empty() {
            self.recycle(state, rng);
        }

        state.transfer_front(Zone::Deck, Zone::Hand, count)
    }

    /// Draw a single card if drawing is allowed and one is available.
    pub fn attempt_draw(&self, state: &mut PlayerCardState, rng: &mut GameRng) -> Option<CardId> {
        self.draw(state, rng, 1).into_iter().next()
    }

    // === Playing ===

    /// Whether `card` may be played to ACTIVE now.
    ///
    /// False when ACTIVE is full, when ACTIVE is empty and the hand is not
    /// full (a turn opens from a full hand), or when `card` is not in hand.
    #[must_use]
    pub fn can_play(&self, state: &PlayerCardState, card: &CardId) -> bool {
        let active = state.count(Zone::Active);
        let hand = state.count(Zone::Hand);

        if active >= self.max_active_cards {
            return false;
        }
        if active == 0 && hand < self.max_hand_cards {
            return false;
        }
        state.zone(Zone::Hand).contains(card)
    }

    /// Move the named hand cards to ACTIVE, in the order given, as far as
    /// ACTIVE has room. Unknown ids are ignored; the rest stay in hand.
    pub fn play(&self, state: &mut PlayerCardState, cards: &[CardId]) -> MovedCards {
        let room = self
            .max_active_cards
            .saturating_sub(state.count(Zone::Active));
        state.transfer_ids(Zone::Hand, Zone::Active, cards, room)
    }

    // === Resolution ===

    /// Move all of ACTIVE to DISCARD, face down. Unlocks drawing.
    pub fn resolve(&self, state: &mut PlayerCardState) -> MovedCards {
        state.transfer_all(Zone::Active, Zone::Discard)
    }

    /// Move all of DISCARD to the back of DECK, face down, then shuffle
    /// DECK. Nothing happens when DISCARD is empty.
    pub fn recycle(&self, state: &mut PlayerCardState, rng: &mut GameRng) -> MovedCards {
        if state.zone(Zone::Discard).is_empty() {
            return MovedCards::new();
        }
        let moved = state.transfer_all(Zone::Discard, Zone::Deck);
        state.shuffle(Zone::Deck, rng);
        moved
    }
}
