//! Engine configuration.
//!
//! The zone limits bound legal state, not just UI hints: every transition
//! clamps against them. Defaults reproduce the standard game
//! (hand of 3, two active cards).

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Maximum number of cards a player may hold in hand.
pub const MAX_HAND_CARDS: usize = 3;

/// Maximum number of cards a player may have in the active zone.
pub const MAX_ACTIVE_CARDS: usize = 2;

/// Size of every character's card pool.
pub const CARDS_PER_CHARACTER: usize = 6;

/// Engine configuration.
///
/// ```
/// use card_zones::core::EngineConfig;
///
/// let config = EngineConfig::new().with_seed(7);
/// assert_eq!(config.seed, Some(7));
/// assert_eq!(config.max_hand_cards, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Hand capacity.
    pub max_hand_cards: usize,

    /// Active zone capacity.
    pub max_active_cards: usize,

    /// Root seed for shuffles. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_hand_cards: MAX_HAND_CARDS,
            max_active_cards: MAX_ACTIVE_CARDS,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the root seed (reproducible shuffles).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check both capacities lie in `1..=CARDS_PER_CHARACTER`.
    ///
    /// The builder enforces this on construction; configs read back from a
    /// snapshot are checked here instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let range = 1..=CARDS_PER_CHARACTER;
        if !range.contains(&self.max_hand_cards) {
            return Err(ConfigError::HandCapacity(self.max_hand_cards));
        }
        if !range.contains(&self.max_active_cards) {
            return Err(ConfigError::ActiveCapacity(self.max_active_cards));
        }
        Ok(())
    }

    /// Set hand capacity.
    ///
    /// Panics if `max` is zero or larger than a character pool.
    #[must_use]
    pub fn with_max_hand_cards(mut self, max: usize) -> Self {
        assert!(
            (1..=CARDS_PER_CHARACTER).contains(&max),
            "Hand capacity must be 1-{}",
            CARDS_PER_CHARACTER
        );
        self.max_hand_cards = max;
        self
    }

    /// Set active zone capacity.
    ///
    /// Panics if `max` is zero or larger than a character pool.
    #[must_use]
    pub fn with_max_active_cards(mut self, max: usize) -> Self {
        assert!(
            (1..=CARDS_PER_CHARACTER).contains(&max),
            "Active capacity must be 1-{}",
            CARDS_PER_CHARACTER
        );
        self.max_active_cards = max;
        self
    }
}
