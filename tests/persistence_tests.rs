//! Snapshot persistence tests.
//!
//! These tests verify:
//! - Round trips through both stores and both codecs
//! - Restored engines continue the same shuffle streams
//! - Invalid or corrupted snapshots are rejected whole

use std::fs;
use std::path::PathBuf;

use card_zones::{
    CardZoneEngine, CharacterId, ConfigError, EngineConfig, EngineSnapshot, FileStore, InMemoryStore,
    InvariantViolation, PlayerId, SharedEngine, SnapshotError, SnapshotStore, Visibility, Zone,
};

fn played_engine() -> CardZoneEngine {
    let mut engine = CardZoneEngine::new(EngineConfig::new().with_seed(99));
    let alice = PlayerId::new("alice");
    let bob = PlayerId::new("bob");
    engine
        .initialize_player(alice.clone(), CharacterId::Burned, true)
        .unwrap();
    engine
        .initialize_player(bob.clone(), CharacterId::Poisoned, false)
        .unwrap();

    let hand: Vec<_> = engine
        .get_player_state(&alice)
        .unwrap()
        .zone(Zone::Hand)
        .ids()
        .cloned()
        .collect();
    engine.move_cards_to_active(&alice, &hand[..2]).unwrap();
    engine
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("card-zones-{}-{name}", std::process::id()))
}

/// Test saving to and loading from memory.
#[test]
fn test_in_memory_round_trip() {
    let mut engine = played_engine();
    let mut store = InMemoryStore::new();
    assert!(engine.last_saved().is_none());

    engine.save(&mut store).unwrap();
    assert!(engine.last_saved().is_some());
    assert!(store.bytes().is_some());

    let restored = CardZoneEngine::load(&store).unwrap();
    assert_eq!(restored.player_ids(), engine.player_ids());
    assert_eq!(restored.last_saved(), engine.last_saved());
    for player in engine.player_ids() {
        assert_eq!(
            restored.get_player_state(&player),
            engine.get_player_state(&player)
        );
    }
}

/// Test that a restored engine shuffles exactly like the original would.
#[test]
fn test_restored_engine_continues_streams() {
    let mut original = played_engine();
    let alice = PlayerId::new("alice");
    let mut store = InMemoryStore::new();
    original.save(&mut store).unwrap();
    let mut restored = CardZoneEngine::load(&store).unwrap();

    original.move_active_to_discard(&alice).unwrap();
    original.shuffle_deck(&alice).unwrap();
    restored.move_active_to_discard(&alice).unwrap();
    restored.shuffle_deck(&alice).unwrap();

    let order = |e: &CardZoneEngine| -> Vec<_> {
        e.get_player_state(&alice)
            .unwrap()
            .zone(Zone::Deck)
            .ids()
            .cloned()
            .collect()
    };
    assert_eq!(order(&original), order(&restored));
}

/// Test that loading from an empty store reports a missing snapshot.
#[test]
fn test_load_missing() {
    let store = InMemoryStore::new();
    assert!(matches!(
        CardZoneEngine::load(&store),
        Err(SnapshotError::Missing)
    ));

    let store = FileStore::new(temp_path("never-written"));
    assert!(matches!(store.load(), Ok(None)));
}

/// Test the file store round trip.
#[test]
fn test_file_store_round_trip() {
    let path = temp_path("round-trip.bin");
    let mut store = FileStore::new(path.clone());
    let mut engine = played_engine();

    engine.save(&mut store).unwrap();
    assert!(path.exists());

    // Saving again overwrites in place
    engine.save(&mut store).unwrap();

    let restored = CardZoneEngine::load(&store).unwrap();
    assert_eq!(restored.snapshot(), engine.snapshot());

    fs::remove_file(&path).unwrap();
}

/// Test that corrupted bytes are a codec error, not a panic.
#[test]
fn test_corrupted_bytes_rejected() {
    let mut store = InMemoryStore::new();
    store.set_bytes(vec![0xff; 7]);

    assert!(matches!(
        CardZoneEngine::load(&store),
        Err(SnapshotError::Bincode(_))
    ));
}

/// Test the JSON codec round trip.
#[test]
fn test_json_round_trip() {
    let engine = played_engine();
    let snapshot = engine.snapshot();

    let json = snapshot.to_json().unwrap();
    assert!(json.contains("alice-card-"));
    assert!(json.contains("\"ACTIVE\""));
    assert!(json.contains("\"PUBLIC\""));

    let decoded = EngineSnapshot::from_json(&json).unwrap();
    assert_eq!(decoded, snapshot);
}

/// Test that stored counts are recomputed from the card sequence.
#[test]
fn test_json_count_is_recomputed() {
    let snapshot = played_engine().snapshot();
    let json = snapshot.to_json().unwrap();

    // Hand holds one card after playing two; claim five
    let tampered = json.replacen("\"count\": 1", "\"count\": 5", 1);
    assert_ne!(tampered, json);

    let decoded = EngineSnapshot::from_json(&tampered).unwrap();
    for player in &decoded.players {
        for zone in Zone::ALL {
            let bucket = player.state.zone(zone);
            assert_eq!(bucket.count(), bucket.len());
        }
    }
}

/// Test that a snapshot breaking an invariant is rejected.
#[test]
fn test_invalid_snapshot_rejected() {
    let mut snapshot = played_engine().snapshot();
    let alice = &mut snapshot.players[0];
    assert_eq!(alice.state.player_id, PlayerId::new("alice"));

    // Flip an active card face down without moving it
    let mut json = serde_json::to_value(&alice.state).unwrap();
    json["zones"]["active"]["cards"][0]["visibility"] = "HIDDEN".into();
    alice.state = serde_json::from_value(json).unwrap();

    match CardZoneEngine::from_snapshot(snapshot.clone()) {
        Err(SnapshotError::Invalid { player, violation }) => {
            assert_eq!(player, PlayerId::new("alice"));
            assert!(matches!(
                violation,
                InvariantViolation::WrongVisibility { zone: Zone::Active, .. }
            ));
        }
        other => panic!("expected invalid snapshot, got {other:?}"),
    }
    assert!(SharedEngine::from_snapshot(snapshot).is_err());
}

/// Test that a snapshot carrying out-of-range capacities is rejected.
#[test]
fn test_out_of_range_config_rejected() {
    let mut snapshot = played_engine().snapshot();
    snapshot.config.max_hand_cards = 100;

    assert!(matches!(
        CardZoneEngine::from_snapshot(snapshot.clone()),
        Err(SnapshotError::InvalidConfig(ConfigError::HandCapacity(100)))
    ));
    assert!(matches!(
        SharedEngine::from_snapshot(snapshot.clone()),
        Err(SnapshotError::InvalidConfig(_))
    ));

    // The same config arriving through a store
    let mut store = InMemoryStore::new();
    store.save(&snapshot).unwrap();
    assert!(matches!(
        CardZoneEngine::load(&store),
        Err(SnapshotError::InvalidConfig(_))
    ));

    snapshot.config.max_hand_cards = 3;
    snapshot.config.max_active_cards = 0;
    assert!(matches!(
        CardZoneEngine::from_snapshot(snapshot),
        Err(SnapshotError::InvalidConfig(ConfigError::ActiveCapacity(0)))
    ));
}

/// Test that a snapshot listing a player twice is rejected.
#[test]
fn test_duplicate_player_rejected() {
    let mut snapshot = played_engine().snapshot();
    let first = snapshot.players[0].clone();
    snapshot.players.push(first);

    assert!(matches!(
        CardZoneEngine::from_snapshot(snapshot),
        Err(SnapshotError::DuplicatePlayer(p)) if p == PlayerId::new("alice")
    ));
}

/// Test that restored cards keep their zone visibility.
#[test]
fn test_restored_visibility() {
    let mut engine = played_engine();
    let mut store = InMemoryStore::new();
    engine.save(&mut store).unwrap();
    let restored = CardZoneEngine::load(&store).unwrap();

    let alice = PlayerId::new("alice");
    let bob = PlayerId::new("bob");
    let active = restored.get_visible_cards(&alice, &bob, Zone::Active).unwrap();
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|c| c.visibility == Visibility::Public));
    assert!(restored.get_visible_cards(&alice, &bob, Zone::Hand).unwrap().is_empty());
}
