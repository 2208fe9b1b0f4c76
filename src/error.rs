//! Error types.
//!
//! Capacity and legality problems are never errors: transitions truncate or
//! no-op instead. What remains is referencing state that does not exist,
//! re-initializing state that does, and snapshots that cannot be trusted.

use thiserror::Error;

use crate::cards::{CardId, CharacterId};
use crate::core::{PlayerId, CARDS_PER_CHARACTER};
use crate::zones::Zone;

/// Engine command and query failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("player {0} has no card state")]
    PlayerNotFound(PlayerId),

    #[error("player {0} is already initialized")]
    AlreadyInitialized(PlayerId),

    #[error("player {player} plays {held}, cannot rebuild a {requested} deck")]
    CharacterMismatch {
        player: PlayerId,
        held: CharacterId,
        requested: CharacterId,
    },
}

/// Character selection failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("character {character} is already taken by {holder}")]
    CharacterTaken {
        character: CharacterId,
        holder: PlayerId,
    },
}

/// A broken player state invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{zone} holds {len} cards, limit is {max}")]
    OverCapacity { zone: Zone, len: usize, max: usize },

    #[error("card {card} is tagged {tagged} but sits in {zone}")]
    Mistagged { card: CardId, tagged: Zone, zone: Zone },

    #[error("card {card} in {zone} is not {zone}-visible")]
    WrongVisibility { card: CardId, zone: Zone },

    #[error("card {0} appears more than once")]
    Duplicate(CardId),

    #[error("card {0} is not part of the player's pool")]
    Foreign(CardId),

    #[error("pool holds {found} cards, expected {expected}")]
    IncompletePool { found: usize, expected: usize },
}

/// An `EngineConfig` capacity outside `1..=CARDS_PER_CHARACTER`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("hand capacity {0} must be 1-{max}", max = CARDS_PER_CHARACTER)]
    HandCapacity(usize),

    #[error("active capacity {0} must be 1-{max}", max = CARDS_PER_CHARACTER)]
    ActiveCapacity(usize),
}

/// Snapshot encoding, storage and validation failures.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("binary snapshot codec failed: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("JSON snapshot codec failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot state for player {player} is invalid: {violation}")]
    Invalid {
        player: PlayerId,
        violation: InvariantViolation,
    },

    #[error("snapshot config is out of range: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("snapshot lists player {0} more than once")]
    DuplicatePlayer(PlayerId),

    #[error("no snapshot has been saved")]
    Missing,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = EngineError::PlayerNotFound(PlayerId::new("ghost"));
        assert_eq!(err.to_string(), "player ghost has no card state");

        let err = SelectionError::CharacterTaken {
            character: CharacterId::Burned,
            holder: PlayerId::new("alice"),
        };
        assert_eq!(
            err.to_string(),
            "character BURNED is already taken by alice"
        );

        let err = InvariantViolation::OverCapacity {
            zone: Zone::Hand,
            len: 4,
            max: 3,
        };
        assert_eq!(err.to_string(), "HAND holds 4 cards, limit is 3");

        let err = ConfigError::HandCapacity(100);
        assert_eq!(err.to_string(), "hand capacity 100 must be 1-6");
    }
}
