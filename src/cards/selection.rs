//! Character selection for a game session.
//!
//! Enforces the one-character-per-player constraint the engine relies on:
//! a character may be held by at most one player at a time.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::character::CharacterId;
use crate::core::PlayerId;
use crate::error::SelectionError;

/// Session-scoped `player -> character` assignments.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSelection {
    selected: FxHashMap<PlayerId, CharacterId>,
}

impl CharacterSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign `character` to `player`.
    ///
    /// Re-selecting the character a player already holds is a no-op.
    /// Selecting a different one releases the previous choice.
    pub fn select(
        &mut self,
        player: &PlayerId,
        character: CharacterId,
    ) -> Result<(), SelectionError> {
        if let Some(holder) = self.holder_of(character) {
            if holder != player {
                return Err(SelectionError::CharacterTaken {
                    character,
                    holder: holder.clone(),
                });
            }
            return Ok(());
        }

        debug!(%player, %character, "character selected");
        self.selected.insert(player.clone(), character);
        Ok(())
    }

    /// The character `player` holds, if any.
    #[must_use]
    pub fn character_of(&self, player: &PlayerId) -> Option<CharacterId> {
        self.selected.get(player).copied()
    }

    /// The player holding `character`, if any.
    #[must_use]
    pub fn holder_of(&self, character: CharacterId) -> Option<&PlayerId> {
        self.selected
            .iter()
            .find(|(_, &c)| c == character)
            .map(|(p, _)| p)
    }

    #[must_use]
    pub fn is_selected(&self, character: CharacterId) -> bool {
        self.holder_of(character).is_some()
    }

    /// Characters nobody holds, in selection-screen order.
    pub fn available(&self) -> impl Iterator<Item = CharacterId> + '_ {
        CharacterId::ALL
            .into_iter()
            .filter(move |&c| !self.is_selected(c))
    }

    /// Drop `player`'s choice, returning it.
    pub fn release(&mut self, player: &PlayerId) -> Option<CharacterId> {
        self.selected.remove(player)
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}
