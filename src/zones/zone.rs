//! The four per-player zones.

use serde::{Deserialize, Serialize};

use crate::cards::Visibility;

/// A named bucket of a player's cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Zone {
    /// Face-down draw pile. Drawn from the front.
    Deck,
    /// Cards held by the owner.
    Hand,
    /// Cards committed this turn, revealed to everyone.
    Active,
    /// Resolved cards, face down until recycled.
    Discard,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Deck, Zone::Hand, Zone::Active, Zone::Discard];

    /// The visibility every card in this zone carries.
    #[must_use]
    pub const fn visibility(self) -> Visibility {
        match self {
            Zone::Deck | Zone::Discard => Visibility::Hidden,
            Zone::Hand => Visibility::Owner,
            Zone::Active => Visibility::Public,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Zone::Deck => "DECK",
            Zone::Hand => "HAND",
            Zone::Active => "ACTIVE",
            Zone::Discard => "DISCARD",
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
