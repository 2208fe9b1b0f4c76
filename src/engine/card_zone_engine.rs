//! Single-owner card zone engine.
//!
//! `CardZoneEngine` owns every player's card state for one game session.
//! Commands take `&mut self`, so the borrow checker serializes them; each
//! one is committed atomically per player (see [`PlayerSlot::apply`]).
//!
//! ## Usage
//!
//! ```
//! use card_zones::{CardZoneEngine, CharacterId, EngineConfig, PlayerId, Zone};
//!
//! let mut engine = CardZoneEngine::new(EngineConfig::new().with_seed(42));
//! let alice = PlayerId::new("alice");
//!
//! engine.initialize_player(alice.clone(), CharacterId::Burned, true).unwrap();
//! assert_eq!(engine.get_card_count(&alice, Zone::Hand).unwrap(), 3);
//!
//! // Play two cards, resolve them, draw again.
//! let hand: Vec<_> = engine.get_player_state(&alice).unwrap()
//!     .zone(Zone::Hand).ids().cloned().collect();
//! engine.move_cards_to_active(&alice, &hand[..2]).unwrap();
//! assert!(!engine.can_draw_cards(&alice));
//!
//! engine.move_active_to_discard(&alice).unwrap();
//! assert!(engine.can_draw_cards(&alice));
//! assert!(engine.attempt_draw_card(&alice).unwrap().is_some());
//! ```

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use tracing::{info, warn};

use super::slot::PlayerSlot;
use crate::cards::{Card, CardId, CharacterId};
use crate::core::config::EngineConfig;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::error::{EngineError, SnapshotError};
use crate::persistence::{EngineSnapshot, SnapshotStore};
use crate::rules::ZoneRules;
use crate::zones::{MovedCards, PlayerCardState, Zone};

/// Per-session card zone engine.
#[derive(Clone, Debug)]
pub struct CardZoneEngine {
    config: EngineConfig,
    rules: ZoneRules,
    /// Root stream; players shuffle from `root.for_context(player_id)`.
    root: GameRng,
    players: FxHashMap<PlayerId, PlayerSlot>,
    last_saved: Option<DateTime<Utc>>,
}

impl Default for CardZoneEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CardZoneEngine {
    /// Create an engine with no players.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let root = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            rules: ZoneRules::from_config(&config),
            config,
            root,
            players: FxHashMap::default(),
            last_saved: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn rules(&self) -> &ZoneRules {
        &self.rules
    }

    /// Seed every player stream derives from.
    #[must_use]
    pub fn root_seed(&self) -> u64 {
        self.root.seed()
    }

    #[must_use]
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        self.last_saved
    }

    // === Commands ===

    /// Create `player`'s card state: build the character deck, shuffle it,
    /// and draw the opening hand. Returns the cards drawn.
    ///
    /// Fails with `AlreadyInitialized` if the player already has state; the
    /// existing state is left untouched.
    pub fn initialize_player(
        &mut self,
        player: PlayerId,
        character: CharacterId,
        is_first_player: bool,
    ) -> Result<MovedCards, EngineError> {
        if self.players.contains_key(&player) {
            warn!(%player, "player already initialized");
            return Err(EngineError::AlreadyInitialized(player));
        }

        let state = PlayerCardState::new(player.clone(), character, is_first_player);
        let rng = self.root.for_context(player.as_str());
        let mut slot = PlayerSlot::new(state, rng);
        let drawn = slot.apply(&self.rules, "initialize_player", |rules, state, rng| {
            rules.deal_opening_hand(state, rng)
        });

        info!(%player, %character, is_first_player, hand = drawn.len(), "player initialized");
        self.players.insert(player, slot);
        Ok(drawn)
    }

    fn commit<T>(
        &mut self,
        player: &PlayerId,
        op: &'static str,
        transition: impl FnOnce(&ZoneRules, &mut PlayerCardState, &mut GameRng) -> T,
    ) -> Result<T, EngineError> {
        let Some(slot) = self.players.get_mut(player) else {
            warn!(%player, op, "unknown player");
            return Err(EngineError::PlayerNotFound(player.clone()));
        };
        Ok(slot.apply(&self.rules, op, transition))
    }

    zone_operations!(mut);

    // === Player table ===

    #[must_use]
    pub fn get_player_state(&self, player: &PlayerId) -> Option<&PlayerCardState> {
        self.players.get(player).map(|slot| &slot.state)
    }

    #[must_use]
    pub fn contains_player(&self, player: &PlayerId) -> bool {
        self.players.contains_key(player)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Initialized players, sorted by id.
    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<_> = self.players.keys().cloned().collect();
        ids.sort();
        ids
    }

    fn read<T>(
        &self,
        player: &PlayerId,
        query: impl FnOnce(&PlayerCardState) -> T,
    ) -> Result<T, EngineError> {
        self.get_player_state(player)
            .map(query)
            .ok_or_else(|| EngineError::PlayerNotFound(player.clone()))
    }

    // === Persistence ===

    /// Capture the engine as plain data.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let mut players: Vec<_> = self.players.values().map(PlayerSlot::to_snapshot).collect();
        players.sort_by(|a, b| a.state.player_id.cmp(&b.state.player_id));

        EngineSnapshot {
            config: self.config.clone(),
            root_seed: self.root.seed(),
            players,
            saved_at: self.last_saved,
        }
    }

    /// Rebuild an engine from a snapshot.
    ///
    /// The config and every player's invariants are checked first; a
    /// snapshot with an out-of-range config or any broken player is
    /// rejected as a whole.
    pub fn from_snapshot(snapshot: EngineSnapshot) -> Result<Self, SnapshotError> {
        snapshot.config.validate().map_err(|e| {
            warn!(error = %e, "snapshot rejected");
            SnapshotError::from(e)
        })?;
        let rules = ZoneRules::from_config(&snapshot.config);
        let mut players = FxHashMap::default();

        for player in snapshot.players {
            let slot = PlayerSlot::from_snapshot(player, &rules).map_err(|e| {
                warn!(error = %e, "snapshot rejected");
                e
            })?;
            let id = slot.state.player_id.clone();
            if players.insert(id.clone(), slot).is_some() {
                warn!(player = %id, "snapshot rejected: duplicate player");
                return Err(SnapshotError::DuplicatePlayer(id));
            }
        }

        Ok(Self {
            rules,
            config: snapshot.config,
            root: GameRng::new(snapshot.root_seed),
            players,
            last_saved: snapshot.saved_at,
        })
    }

    /// Write a snapshot to `store` and record the save time.
    pub fn save(&mut self, store: &mut impl SnapshotStore) -> Result<(), SnapshotError> {
        let saved_at = Utc::now();
        let mut snapshot = self.snapshot();
        snapshot.saved_at = Some(saved_at);

        store.save(&snapshot)?;
        self.last_saved = Some(saved_at);
        info!(players = snapshot.players.len(), %saved_at, "engine saved");
        Ok(())
    }

    /// Rebuild an engine from the snapshot in `store`.
    pub fn load(store: &impl SnapshotStore) -> Result<Self, SnapshotError> {
        let snapshot = store.load()?.ok_or(SnapshotError::Missing)?;
        let engine = Self::from_snapshot(snapshot)?;
        info!(players = engine.player_count(), "engine loaded");
        Ok(engine)
    }
}
