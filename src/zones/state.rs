//! Per-player card state: four zone buckets.
//!
//! `PlayerCardState` knows how to move cards between its zones and keep
//! their tags consistent. It does not know the game's capacity rules; those
//! live in [`crate::rules::ZoneRules`], which drives these primitives.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

use super::bucket::ZoneBucket;
use super::zone::Zone;
use crate::cards::{Card, CardId, CharacterId};
use crate::core::config::CARDS_PER_CHARACTER;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::error::InvariantViolation;

/// Ids of cards moved by one transition. A transition never moves more
/// than one character pool, so this never spills to the heap.
pub type MovedCards = SmallVec<[CardId; CARDS_PER_CHARACTER]>;

/// The four buckets of one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneSet {
    pub deck: ZoneBucket,
    pub hand: ZoneBucket,
    pub active: ZoneBucket,
    pub discard: ZoneBucket,
}

impl Index<Zone> for ZoneSet {
    type Output = ZoneBucket;

    fn index(&self, zone: Zone) -> &Self::Output {
        match zone {
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Active => &self.active,
            Zone::Discard => &self.discard,
        }
    }
}

impl IndexMut<Zone> for ZoneSet {
    fn index_mut(&mut self, zone: Zone) -> &mut Self::Output {
        match zone {
            Zone::Deck => &mut self.deck,
            Zone::Hand => &mut self.hand,
            Zone::Active => &mut self.active,
            Zone::Discard => &mut self.discard,
        }
    }
}

/// All card state for one player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerCardState {
    pub player_id: PlayerId,
    pub character_id: CharacterId,
    pub is_first_player: bool,
    zones: ZoneSet,
}

impl PlayerCardState {
    /// Create a state with all four zones empty.
    #[must_use]
    pub fn new(player_id: PlayerId, character_id: CharacterId, is_first_player: bool) -> Self {
        Self {
            player_id,
            character_id,
            is_first_player,
            zones: ZoneSet::default(),
        }
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneSet {
        &self.zones
    }

    #[must_use]
    pub fn zone(&self, zone: Zone) -> &ZoneBucket {
        &self.zones[zone]
    }

    /// Cached count of a zone.
    #[must_use]
    pub fn count(&self, zone: Zone) -> usize {
        self.zones[zone].count()
    }

    /// Which zone holds `card`, if the player owns it.
    #[must_use]
    pub fn zone_of(&self, card: &CardId) -> Option<Zone> {
        Zone::ALL
            .into_iter()
            .find(|&zone| self.zones[zone].contains(card))
    }

    /// Every card the player owns, zone by zone.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        Zone::ALL
            .into_iter()
            .flat_map(move |zone| self.zones[zone].iter())
    }

    /// Cards in `zone` whose face `observer` may see.
    #[must_use]
    pub fn visible_cards(&self, zone: Zone, observer: &PlayerId) -> Vec<Card> {
        self.zones[zone]
            .iter()
            .filter(|card| card.is_visible_to(observer))
            .cloned()
            .collect()
    }

    // === Transfers ===

    /// Build the character's pool into DECK in printed order and empty the
    /// other zones.
    pub fn rebuild_pool(&mut self) {
        let player = self.player_id.clone();
        let cards = self
            .character_id
            .card_numbers()
            .enumerate()
            .map(|(position, number)| Card::new(player.clone(), number, position));

        self.zones = ZoneSet {
            deck: ZoneBucket::from_cards(cards),
            ..ZoneSet::default()
        };
    }

    /// Move up to `n` cards from the front of `from` to the back of `to`.
    pub fn transfer_front(&mut self, from: Zone, to: Zone, n: usize) -> MovedCards {
        let cards = self.zones[from].take_front(n);
        self.place(to, cards)
    }

    /// Move every card of `from` to the back of `to`.
    pub fn transfer_all(&mut self, from: Zone, to: Zone) -> MovedCards {
        let cards = self.zones[from].take_all();
        self.place(to, cards)
    }

    /// Move the named cards from `from` to `to`, in the order given, stopping
    /// after `limit` cards. Ids not in `from` and repeated ids are skipped.
    pub fn transfer_ids(&mut self, from: Zone, to: Zone, ids: &[CardId], limit: usize) -> MovedCards {
        let mut cards = Vec::with_capacity(limit.min(ids.len()));
        for id in ids {
            if cards.len() >= limit {
                break;
            }
            if let Some(card) = self.zones[from].remove(id) {
                cards.push(card);
            }
        }
        self.place(to, cards)
    }

    /// Shuffle one zone.
    pub fn shuffle(&mut self, zone: Zone, rng: &mut GameRng) {
        self.zones[zone].shuffle(rng);
    }

    fn place(&mut self, to: Zone, cards: Vec<Card>) -> MovedCards {
        let mut moved = MovedCards::new();
        for mut card in cards {
            card.retag(to);
            moved.push(card.id.clone());
            self.zones[to].push_back(card);
        }
        moved
    }

    // === Invariants ===

    /// Check every structural invariant of this state.
    ///
    /// - each card is tagged with, and visible as, the zone it sits in
    /// - no card appears twice
    /// - the cards are exactly the character's pool
    /// - HAND and ACTIVE respect the given capacities
    pub fn validate(&self, max_hand: usize, max_active: usize) -> Result<(), InvariantViolation> {
        for (zone, max) in [(Zone::Hand, max_hand), (Zone::Active, max_active)] {
            let len = self.zones[zone].len();
            if len > max {
                return Err(InvariantViolation::OverCapacity { zone, len, max });
            }
        }

        let mut seen = FxHashSet::default();
        for zone in Zone::ALL {
            for card in self.zones[zone].iter() {
                if card.zone != zone {
                    return Err(InvariantViolation::Mistagged {
                        card: card.id.clone(),
                        tagged: card.zone,
                        zone,
                    });
                }
                if card.visibility != zone.visibility() {
                    return Err(InvariantViolation::WrongVisibility {
                        card: card.id.clone(),
                        zone,
                    });
                }
                if card.player_id != self.player_id
                    || !self.character_id.owns(card.number)
                    || card.id != CardId::for_card(&self.player_id, card.number)
                {
                    return Err(InvariantViolation::Foreign(card.id.clone()));
                }
                if !seen.insert(card.number) {
                    return Err(InvariantViolation::Duplicate(card.id.clone()));
                }
            }
        }

        if seen.len() != CARDS_PER_CHARACTER {
            return Err(InvariantViolation::IncompletePool {
                found: seen.len(),
                expected: CARDS_PER_CHARACTER,
            });
        }

        Ok(())
    }
}
