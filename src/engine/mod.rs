//! Card zone engines.
//!
//! - [`CardZoneEngine`]: single owner, commands take `&mut self`.
//! - [`SharedEngine`]: shared across threads, commands take `&self` and
//!   lock per player.
//!
//! Both route every command through [`PlayerSlot::apply`] and the same
//! [`ZoneRules`](crate::rules::ZoneRules).

/// Commands and per-player queries common to both engines.
///
/// Expands inside an engine's `impl` block. The engine provides
/// `commit(player, op, transition)`, `read(player, query)` and a `rules`
/// field; pass `mut` when commands take `&mut self`.
macro_rules! zone_operations {
    ($($mutability:tt)?) => {
        // === Commands ===

        /// Rebuild `player`'s pool into a shuffled DECK.
        ///
        /// The full pool is re-created, so HAND, ACTIVE and DISCARD are
        /// emptied along the way. `character` must be the one the player
        /// was initialized with; a player never switches character here.
        pub fn create_initial_deck(
            &$($mutability)? self,
            player: &PlayerId,
            character: CharacterId,
        ) -> Result<(), EngineError> {
            let held = self.read(player, |state| state.character_id)?;
            if held != character {
                warn!(%player, %held, requested = %character, "deck rebuild for another character");
                return Err(EngineError::CharacterMismatch {
                    player: player.clone(),
                    held,
                    requested: character,
                });
            }
            self.commit(player, "create_initial_deck", |rules, state, rng| {
                rules.create_initial_deck(state, rng);
            })
        }

        /// Shuffle `player`'s DECK.
        pub fn shuffle_deck(&$($mutability)? self, player: &PlayerId) -> Result<(), EngineError> {
            self.commit(player, "shuffle_deck", |rules, state, rng| {
                rules.shuffle_deck(state, rng);
            })
        }

        /// Draw up to `count` cards. Returns the cards actually drawn.
        pub fn draw_cards(
            &$($mutability)? self,
            player: &PlayerId,
            count: usize,
        ) -> Result<MovedCards, EngineError> {
            self.commit(player, "draw_cards", |rules, state, rng| {
                rules.draw(state, rng, count)
            })
        }

        /// Draw one card if allowed. Returns the card drawn.
        pub fn attempt_draw_card(
            &$($mutability)? self,
            player: &PlayerId,
        ) -> Result<Option<CardId>, EngineError> {
            self.commit(player, "attempt_draw_card", |rules, state, rng| {
                rules.attempt_draw(state, rng)
            })
        }

        /// Play hand cards to ACTIVE, as many as fit. Returns the cards moved.
        pub fn move_cards_to_active(
            &$($mutability)? self,
            player: &PlayerId,
            cards: &[CardId],
        ) -> Result<MovedCards, EngineError> {
            self.commit(player, "move_cards_to_active", |rules, state, _| {
                rules.play(state, cards)
            })
        }

        /// Resolve the turn: ACTIVE goes to DISCARD face down.
        pub fn move_active_to_discard(
            &$($mutability)? self,
            player: &PlayerId,
        ) -> Result<MovedCards, EngineError> {
            self.commit(player, "move_active_to_discard", |rules, state, _| {
                rules.resolve(state)
            })
        }

        /// Recycle DISCARD into DECK and shuffle.
        pub fn move_discard_to_deck(
            &$($mutability)? self,
            player: &PlayerId,
        ) -> Result<MovedCards, EngineError> {
            self.commit(player, "move_discard_to_deck", |rules, state, rng| {
                rules.recycle(state, rng)
            })
        }

        // === Queries ===

        /// Whether `player` may draw now. False for unknown players.
        #[must_use]
        pub fn can_draw_cards(&self, player: &PlayerId) -> bool {
            self.read(player, |state| self.rules.can_draw(state))
                .unwrap_or(false)
        }

        /// Whether `player` may play `card` now. False for unknown players.
        #[must_use]
        pub fn can_play_card(&self, player: &PlayerId, card: &CardId) -> bool {
            self.read(player, |state| self.rules.can_play(state, card))
                .unwrap_or(false)
        }

        /// Cards in `owner`'s `zone` that `observer` may see.
        pub fn get_visible_cards(
            &self,
            owner: &PlayerId,
            observer: &PlayerId,
            zone: Zone,
        ) -> Result<Vec<Card>, EngineError> {
            self.read(owner, |state| state.visible_cards(zone, observer))
        }

        /// Cached card count of `player`'s `zone`.
        pub fn get_card_count(&self, player: &PlayerId, zone: Zone) -> Result<usize, EngineError> {
            self.read(player, |state| state.count(zone))
        }

        /// Which of `player`'s zones holds `card`.
        pub fn zone_of(&self, player: &PlayerId, card: &CardId) -> Result<Option<Zone>, EngineError> {
            self.read(player, |state| state.zone_of(card))
        }
    };
}

pub mod card_zone_engine;
pub mod shared;
pub mod slot;

pub use card_zone_engine::CardZoneEngine;
pub use shared::SharedEngine;
pub use slot::PlayerSlot;
