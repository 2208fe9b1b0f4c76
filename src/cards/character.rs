//! Playable characters and their card pools.
//!
//! Each character owns a contiguous block of six printed card numbers:
//!
//! | Character | Numbers | Label range   |
//! |-----------|---------|---------------|
//! | Poisoned  | 1–6     | ST-01..ST-06  |
//! | Burned    | 7–12    | ST-07..ST-12  |
//! | Flayed    | 13–18   | ST-13..ST-18  |
//! | Quartered | 19–24   | ST-19..ST-24  |

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

use super::card::CardNumber;
use crate::core::config::CARDS_PER_CHARACTER;

/// Character identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CharacterId {
    Poisoned,
    Burned,
    Flayed,
    Quartered,
}

impl CharacterId {
    /// All characters, in selection-screen order.
    pub const ALL: [CharacterId; 4] = [
        CharacterId::Poisoned,
        CharacterId::Burned,
        CharacterId::Flayed,
        CharacterId::Quartered,
    ];

    /// First card number of this character's pool.
    #[must_use]
    pub const fn first_number(self) -> u8 {
        let block = match self {
            CharacterId::Poisoned => 0,
            CharacterId::Burned => 1,
            CharacterId::Flayed => 2,
            CharacterId::Quartered => 3,
        };
        block * CARDS_PER_CHARACTER as u8 + 1
    }

    /// Printed numbers of this character's cards.
    #[must_use]
    pub fn card_range(self) -> RangeInclusive<u8> {
        let start = self.first_number();
        start..=start + CARDS_PER_CHARACTER as u8 - 1
    }

    /// The six card numbers in creation order.
    pub fn card_numbers(self) -> impl Iterator<Item = CardNumber> {
        self.card_range().filter_map(CardNumber::new)
    }

    /// Whether `number` belongs to this character.
    #[must_use]
    pub fn owns(self, number: CardNumber) -> bool {
        self.card_range().contains(&number.get())
    }

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CharacterId::Poisoned => "L'Empoisonné",
            CharacterId::Burned => "L'Immolé",
            CharacterId::Flayed => "L'Écorché",
            CharacterId::Quartered => "L'Écartelé",
        }
    }

    /// Flavor line shown under the name.
    #[must_use]
    pub const fn tagline(self) -> &'static str {
        match self {
            CharacterId::Poisoned => {
                "Je me disais bien aussi que cette pomme avait l'air un peu trop rouge !"
            }
            CharacterId::Burned => "Quelqu'un d'autre sent une odeur de pain qui brule ?",
            CharacterId::Flayed => "Toute cette histoire me met les nerfs à vif.",
            CharacterId::Quartered => "Et avec mes propres chevaux en plus...",
        }
    }

    /// Printed labels of the first and last card, e.g. `("ST-07", "ST-12")`.
    #[must_use]
    pub fn label_range(self) -> (String, String) {
        let range = self.card_range();
        (
            format!("ST-{:02}", range.start()),
            format!("ST-{:02}", range.end()),
        )
    }

    /// The constant used in serialized form (`"BURNED"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CharacterId::Poisoned => "POISONED",
            CharacterId::Burned => "BURNED",
            CharacterId::Flayed => "FLAYED",
            CharacterId::Quartered => "QUARTERED",
        }
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown character: {0}")]
pub struct CharacterParseError(pub String);

impl FromStr for CharacterId {
    type Err = CharacterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CharacterId::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CharacterParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_ranges() {
        assert_eq!(CharacterId::Poisoned.card_range(), 1..=6);
        assert_eq!(CharacterId::Burned.card_range(), 7..=12);
        assert_eq!(CharacterId::Flayed.card_range(), 13..=18);
        assert_eq!(CharacterId::Quartered.card_range(), 19..=24);
    }

    #[test]
    fn test_pools_are_disjoint_and_complete() {
        let mut all: Vec<u8> = CharacterId::ALL
            .iter()
            .flat_map(|c| c.card_numbers().map(CardNumber::get))
            .collect();
        assert_eq!(all.len(), 24);
        all.sort_unstable();
        all.dedup();
        assert_eq!(all, (1..=24).collect::<Vec<_>>());
    }

    #[test]
    fn test_owns() {
        let seven = CardNumber::new(7).unwrap();
        assert!(CharacterId::Burned.owns(seven));
        assert!(!CharacterId::Poisoned.owns(seven));
    }

    #[test]
    fn test_label_range() {
        assert_eq!(
            CharacterId::Burned.label_range(),
            ("ST-07".to_string(), "ST-12".to_string())
        );
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("BURNED".parse::<CharacterId>(), Ok(CharacterId::Burned));
        assert_eq!("flayed".parse::<CharacterId>(), Ok(CharacterId::Flayed));
        assert!("HANGED".parse::<CharacterId>().is_err());
        assert_eq!(CharacterId::Quartered.to_string(), "QUARTERED");
    }

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&CharacterId::Poisoned).unwrap();
        assert_eq!(json, "\"POISONED\"");
    }
}
