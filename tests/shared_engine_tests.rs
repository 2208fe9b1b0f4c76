//! Thread-safety tests for `SharedEngine`.
//!
//! Players are driven from separate threads; every player's state must
//! stay valid and independent of the others.

use std::sync::Arc;
use std::thread;

use card_zones::{
    CardZoneEngine, CharacterId, EngineConfig, EngineError, PlayerId, SharedEngine, Zone,
};

const TURNS: usize = 200;

fn play_turns(engine: &SharedEngine, player: &PlayerId) {
    for _ in 0..TURNS {
        let hand: Vec<_> = engine
            .get_player_state(player)
            .unwrap()
            .zone(Zone::Hand)
            .ids()
            .cloned()
            .collect();
        engine.move_cards_to_active(player, &hand).unwrap();
        engine.move_active_to_discard(player).unwrap();
        while engine.can_draw_cards(player) {
            engine.attempt_draw_card(player).unwrap();
        }
    }
}

/// Test that players driven in parallel keep valid states.
#[test]
fn test_parallel_players() {
    let engine = Arc::new(SharedEngine::new(EngineConfig::new().with_seed(3)));
    let players: Vec<_> = CharacterId::ALL
        .into_iter()
        .enumerate()
        .map(|(i, character)| {
            let player = PlayerId::new(format!("player-{i}"));
            engine
                .initialize_player(player.clone(), character, i == 0)
                .unwrap();
            player
        })
        .collect();

    let handles: Vec<_> = players
        .iter()
        .cloned()
        .map(|player| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || play_turns(&engine, &player))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    for player in &players {
        let state = engine.get_player_state(player).unwrap();
        assert_eq!(state.validate(3, 2), Ok(()));
        assert_eq!(state.count(Zone::Hand), 3);
        assert_eq!(state.count(Zone::Active), 0);
    }
}

/// Test that parallel play matches sequential play per player.
#[test]
fn test_parallel_matches_sequential() {
    let config = EngineConfig::new().with_seed(17);
    let alice = PlayerId::new("alice");
    let bob = PlayerId::new("bob");

    let shared = Arc::new(SharedEngine::new(config.clone()));
    let sequential = SharedEngine::new(config);
    for engine in [shared.as_ref(), &sequential] {
        engine
            .initialize_player(alice.clone(), CharacterId::Burned, true)
            .unwrap();
        engine
            .initialize_player(bob.clone(), CharacterId::Flayed, false)
            .unwrap();
    }

    let handles: Vec<_> = [alice.clone(), bob.clone()]
        .into_iter()
        .map(|player| {
            let engine = Arc::clone(&shared);
            thread::spawn(move || play_turns(&engine, &player))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    play_turns(&sequential, &alice);
    play_turns(&sequential, &bob);

    let cards = |engine: &SharedEngine, player: &PlayerId| -> Vec<_> {
        engine
            .get_player_state(player)
            .unwrap()
            .all_cards()
            .map(|c| c.id.clone())
            .collect()
    };
    assert_eq!(cards(&shared, &alice), cards(&sequential, &alice));
    assert_eq!(cards(&shared, &bob), cards(&sequential, &bob));
}

/// Test that racing initializations of one player let exactly one win.
#[test]
fn test_racing_initialization() {
    let engine = Arc::new(SharedEngine::new(EngineConfig::new().with_seed(1)));
    let player = PlayerId::new("p");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let player = player.clone();
            thread::spawn(move || engine.initialize_player(player, CharacterId::Poisoned, true))
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == EngineError::AlreadyInitialized(player.clone())));
    assert_eq!(engine.player_count(), 1);
}

/// Test snapshot round trip through the shared engine.
#[test]
fn test_shared_snapshot_round_trip() {
    let mut engine = CardZoneEngine::new(EngineConfig::new().with_seed(8));
    let p = PlayerId::new("p");
    engine
        .initialize_player(p.clone(), CharacterId::Quartered, true)
        .unwrap();

    let shared = SharedEngine::from_snapshot(engine.snapshot()).unwrap();
    assert_eq!(shared.snapshot(), engine.snapshot());

    shared.shuffle_deck(&p).unwrap();
    engine.shuffle_deck(&p).unwrap();
    assert_eq!(shared.get_player_state(&p).as_ref(), engine.get_player_state(&p));
}
