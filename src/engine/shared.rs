//! Thread-safe card zone engine.
//!
//! The player table sits behind a `RwLock` and each player's slot behind its
//! own `Mutex`. Commands on different players proceed in parallel; commands
//! on the same player are serialized by that player's lock. The table lock
//! is only held long enough to find (or insert) a slot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, RwLock};
use rustc_hash::FxHashMap;
use tracing::{info, warn};

use super::card_zone_engine::CardZoneEngine;
use super::slot::PlayerSlot;
use crate::cards::{Card, CardId, CharacterId};
use crate::core::config::EngineConfig;
use crate::core::player::PlayerId;
use crate::core::rng::GameRng;
use crate::error::{EngineError, SnapshotError};
use crate::persistence::{EngineSnapshot, SnapshotStore};
use crate::rules::ZoneRules;
use crate::zones::{MovedCards, PlayerCardState, Zone};

type SharedSlot = Arc<Mutex<PlayerSlot>>;

/// Card zone engine usable from many threads through `&self`.
#[derive(Debug)]
pub struct SharedEngine {
    config: EngineConfig,
    rules: ZoneRules,
    root: GameRng,
    players: RwLock<FxHashMap<PlayerId, SharedSlot>>,
    last_saved: Mutex<Option<DateTime<Utc>>>,
}

impl Default for SharedEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl From<CardZoneEngine> for SharedEngine {
    fn from(engine: CardZoneEngine) -> Self {
        let snapshot = engine.snapshot();
        let rules = *engine.rules();
        let players = snapshot
            .players
            .into_iter()
            .map(|p| {
                let slot = PlayerSlot::new(p.state, GameRng::from_state(&p.rng));
                (slot.state.player_id.clone(), Arc::new(Mutex::new(slot)))
            })
            .collect();

        Self {
            config: snapshot.config,
            rules,
            root: GameRng::new(snapshot.root_seed),
            players: RwLock::new(players),
            last_saved: Mutex::new(snapshot.saved_at),
        }
    }
}

impl SharedEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let root = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self {
            rules: ZoneRules::from_config(&config),
            config,
            root,
            players: RwLock::new(FxHashMap::default()),
            last_saved: Mutex::new(None),
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

    #[must_use]
    pub fn last_saved(&self) -> Option<DateTime<Utc>> {
        *self.last_saved.lock()
    }

    // === Commands ===

    /// See [`CardZoneEngine::initialize_player`].
    pub fn initialize_player(
        &self,
        player: PlayerId,
        character: CharacterId,
        is_first_player: bool,
    ) -> Result<MovedCards, EngineError> {
        let mut players = self.players.write();
        if players.contains_key(&player) {
            warn!(%player, "player already initialized");
            return Err(EngineError::AlreadyInitialized(player));
        }

        let state = PlayerCardState::new(player.clone(), character, is_first_player);
        let mut slot = PlayerSlot::new(state, self.root.for_context(player.as_str()));
        let drawn = slot.apply(&self.rules, "initialize_player", |rules, state, rng| {
            rules.deal_opening_hand(state, rng)
        });

        info!(%player, %character, is_first_player, hand = drawn.len(), "player initialized");
        players.insert(player, Arc::new(Mutex::new(slot)));
        Ok(drawn)
    }

    fn slot(&self, player: &PlayerId) -> Result<SharedSlot, EngineError> {
        self.players
            .read()
            .get(player)
            .cloned()
            .ok_or_else(|| EngineError::PlayerNotFound(player.clone()))
    }

    fn commit<T>(
        &self,
        player: &PlayerId,
        op: &'static str,
        transition: impl FnOnce(&ZoneRules, &mut PlayerCardState, &mut GameRng) -> T,
    ) -> Result<T, EngineError> {
        let slot = self.slot(player).map_err(|e| {
            warn!(%player, op, "unknown player");
            e
        })?;
        let mut slot = slot.lock();
        Ok(slot.apply(&self.rules, op, transition))
    }

    fn read<T>(
        &self,
        player: &PlayerId,
        query: impl FnOnce(&PlayerCardState) -> T,
    ) -> Result<T, EngineError> {
        let slot = self.slot(player)?;
        let slot = slot.lock();
        Ok(query(&slot.state))
    }

    zone_operations!();

    // === Player table ===

    /// A copy of `player`'s current state.
    #[must_use]
    pub fn get_player_state(&self, player: &PlayerId) -> Option<PlayerCardState> {
        self.read(player, PlayerCardState::clone).ok()
    }

    #[must_use]
    pub fn contains_player(&self, player: &PlayerId) -> bool {
        self.players.read().contains_key(player)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.read().len()
    }

    /// Initialized players, sorted by id.
    #[must_use]
    pub fn player_ids(&self) -> Vec<PlayerId> {
        let mut ids: Vec<_> = self.players.read().keys().cloned().collect();
        ids.sort();
        ids
    }

    // === Persistence ===

    /// Capture every player. Each player is captured under its own lock, so
    /// the result is consistent per player.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let slots: Vec<SharedSlot> = self.players.read().values().cloned().collect();
        let mut players: Vec<_> = slots.iter().map(|slot| slot.lock().to_snapshot()).collect();
        players.sort_by(|a, b| a.state.player_id.cmp(&b.state.player_id));

        EngineSnapshot {
            config: self.config.clone(),
            root_seed: self.root.seed(),
            players,
            saved_at: self.last_saved(),
        }
    }

    /// Rebuild from a snapshot, validating every player.
    pub fn from_snapshot(snapshot: EngineSnapshot) -> Result<Self, SnapshotError> {
        CardZoneEngine::from_snapshot(snapshot).map(Self::from)
    }

    /// Write a snapshot to `store` and record the save time.
    pub fn save(&self, store: &mut impl SnapshotStore) -> Result<(), SnapshotError> {
        let saved_at = Utc::now();
        let mut snapshot = self.snapshot();
        snapshot.saved_at = Some(saved_at);

        store.save(&snapshot)?;
        *self.last_saved.lock() = Some(saved_at);
        info!(players = snapshot.players.len(), %saved_at, "engine saved");
        Ok(())
    }

    /// Rebuild an engine from the snapshot in `store`.
    pub fn load(store: &impl SnapshotStore) -> Result<Self, SnapshotError> {
        CardZoneEngine::load(store).map(Self::from)
    }
}
