//! One player's entry in an engine: card state plus its shuffle stream.

use tracing::debug;

use crate::core::rng::GameRng;
use crate::error::SnapshotError;
use crate::persistence::PlayerSnapshot;
use crate::rules::ZoneRules;
use crate::zones::{PlayerCardState, Zone};

/// A player's card state and the RNG its shuffles draw from.
#[derive(Clone, Debug)]
pub struct PlayerSlot {
    pub state: PlayerCardState,
    pub rng: GameRng,
}

impl PlayerSlot {
    #[must_use]
    pub fn new(state: PlayerCardState, rng: GameRng) -> Self {
        Self { state, rng }
    }

    /// Apply one transition atomically.
    ///
    /// The transition runs against a copy of the slot; the copy replaces the
    /// slot only once the transition has finished, so a reader never sees a
    /// half-applied move. Copies are cheap: zone sequences are `im` vectors.
    pub fn apply<T>(
        &mut self,
        rules: &ZoneRules,
        op: &'static str,
        transition: impl FnOnce(&ZoneRules, &mut PlayerCardState, &mut GameRng) -> T,
    ) -> T {
        let mut next = self.clone();
        let out = transition(rules, &mut next.state, &mut next.rng);

        debug_assert_eq!(
            next.state
                .validate(rules.max_hand_cards, rules.max_active_cards),
            Ok(()),
            "{} broke a zone invariant",
            op
        );

        *self = next;
        debug!(
            player = %self.state.player_id,
            op,
            deck = self.state.count(Zone::Deck),
            hand = self.state.count(Zone::Hand),
            active = self.state.count(Zone::Active),
            discard = self.state.count(Zone::Discard),
            "zone transition committed"
        );
        out
    }

    /// Capture as plain data.
    #[must_use]
    pub fn to_snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            state: self.state.clone(),
            rng: self.rng.state(),
        }
    }

    /// Rebuild from plain data, rejecting states that break an invariant.
    pub fn from_snapshot(snapshot: PlayerSnapshot, rules: &ZoneRules) -> Result<Self, SnapshotError> {
        snapshot
            .state
            .validate(rules.max_hand_cards, rules.max_active_cards)
            .map_err(|violation| SnapshotError::Invalid {
                player: snapshot.state.player_id.clone(),
                violation,
            })?;

        Ok(Self {
            rng: GameRng::from_state(&snapshot.rng),
            state: snapshot.state,
        })
    }
}
