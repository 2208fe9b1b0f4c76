//! # card-zones
//!
//! Card zone state machine for a four-character card game.
//!
//! Each player owns six cards that move between four zones (deck, hand,
//! active, discard) under a small set of rules: hand and active capacity,
//! a draw lock while cards are active, and recycling the discard pile once
//! the deck runs dry.
//!
//! ## Design Principles
//!
//! 1. **Transitions Never Fail**: Over-capacity or illegal moves truncate or
//!    no-op. Errors are reserved for unknown or duplicate players and for
//!    untrusted snapshots.
//!
//! 2. **Atomic Per Player**: Every command runs against a copy of the
//!    player's state and replaces it only when finished. Copies are cheap
//!    via `im-rs`.
//!
//! 3. **Deterministic Shuffles**: Each player shuffles from its own ChaCha
//!    stream derived from the engine seed and the player id.
//!
//! ## Modules
//!
//! - `core`: Player ids, RNG, configuration
//! - `cards`: Card identity, characters, character selection
//! - `zones`: The four zones, zone buckets, per-player card state
//! - `rules`: Draw, play, resolve and recycle rules
//! - `engine`: Single-owner and thread-safe engines
//! - `persistence`: Snapshots and snapshot stores
//! - `error`: Error types

pub mod core;
pub mod cards;
pub mod zones;
pub mod rules;
pub mod engine;
pub mod persistence;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, GameRng, GameRngState,
    EngineConfig, CARDS_PER_CHARACTER, MAX_ACTIVE_CARDS, MAX_HAND_CARDS,
};

pub use crate::cards::{
    Card, CardId, CardNumber, Visibility,
    CharacterId, CharacterParseError, CharacterSelection,
};

pub use crate::zones::{Zone, ZoneBucket, ZoneSet, PlayerCardState, MovedCards};

pub use crate::rules::ZoneRules;

pub use crate::engine::{CardZoneEngine, SharedEngine, PlayerSlot};

pub use crate::persistence::{
    EngineSnapshot, PlayerSnapshot,
    SnapshotStore, InMemoryStore, FileStore,
};

pub use crate::error::{
    ConfigError, EngineError, InvariantViolation, SelectionError, SnapshotError,
};
