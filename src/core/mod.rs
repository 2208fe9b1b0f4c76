//! Core engine types: players, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{EngineConfig, CARDS_PER_CHARACTER, MAX_ACTIVE_CARDS, MAX_HAND_CARDS};
pub use player::PlayerId;
pub use rng::{GameRng, GameRngState};
