//! Card instances.
//!
//! A `Card` has a fixed identity (id, owner, number) and a mutable location
//! (zone, visibility, position). Cards are never created or destroyed after a
//! deck is built, only moved between zones and re-tagged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;
use crate::zones::Zone;

/// Card identifier, unique across the session.
///
/// Derived from the owner and the card number: `"{player}-card-{number}"`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Build the id of `player`'s card `number`.
    #[must_use]
    pub fn for_card(player: &PlayerId, number: CardNumber) -> Self {
        Self(format!("{}-card-{}", player, number.get()))
    }

    /// Wrap an id received from the UI layer.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Printed card number, 1 through 24.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct CardNumber(u8);

impl CardNumber {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 24;

    /// Returns `None` outside `MIN..=MAX`.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number >= Self::MIN && number <= Self::MAX {
            Some(Self(number))
        } else {
            None
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for CardNumber {
    type Error = String;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number).ok_or_else(|| {
            format!(
                "card number {} outside {}..={}",
                number,
                CardNumber::MIN,
                CardNumber::MAX
            )
        })
    }
}

impl From<CardNumber> for u8 {
    fn from(number: CardNumber) -> Self {
        number.0
    }
}

/// Who may see a card's face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Visibility {
    /// Nobody (deck, discard).
    Hidden,
    /// Only the owning player (hand).
    Owner,
    /// Every player (active zone).
    Public,
}

impl Visibility {
    /// Whether `observer` may see a card owned by `owner`.
    #[must_use]
    pub fn permits(self, owner: &PlayerId, observer: &PlayerId) -> bool {
        match self {
            Visibility::Hidden => false,
            Visibility::Owner => owner == observer,
            Visibility::Public => true,
        }
    }
}

/// A card in a player's pool.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Owning player.
    pub player_id: PlayerId,

    pub number: CardNumber,

    /// Current zone.
    pub zone: Zone,

    pub visibility: Visibility,

    /// Index within the current zone.
    pub position: usize,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Card {
    /// Create a face-down deck card.
    #[must_use]
    pub fn new(player_id: PlayerId, number: CardNumber, position: usize) -> Self {
        let now = Utc::now();
        Self {
            id: CardId::for_card(&player_id, number),
            player_id,
            number,
            zone: Zone::Deck,
            visibility: Visibility::Hidden,
            position,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move the card to `zone` with the visibility that zone imposes.
    pub fn retag(&mut self, zone: Zone) {
        self.zone = zone;
        self.visibility = zone.visibility();
        self.updated_at = Utc::now();
    }

    /// Whether `observer` may see this card's face.
    #[must_use]
    pub fn is_visible_to(&self, observer: &PlayerId) -> bool {
        self.visibility.permits(&self.player_id, observer)
    }
}
