//! Plain-data engine snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::config::EngineConfig;
use crate::core::rng::GameRngState;
use crate::error::SnapshotError;
use crate::zones::PlayerCardState;

/// One player's state and shuffle stream position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    pub state: PlayerCardState,
    pub rng: GameRngState,
}

/// Everything needed to rebuild an engine.
///
/// Players are stored sorted by id so equal engines encode to equal bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: EngineConfig,

    /// Seed the per-player streams are derived from.
    pub root_seed: u64,

    pub players: Vec<PlayerSnapshot>,

    pub saved_at: Option<DateTime<Utc>>,
}

impl EngineSnapshot {
    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Human-readable encoding.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
