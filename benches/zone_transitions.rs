use std::hint::black_box;

use card_zones::{
    CardZoneEngine, CharacterId, EngineConfig, InMemoryStore, PlayerId, SharedEngine, Zone,
};
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

fn engine_with(players: &[&str]) -> CardZoneEngine {
    let mut engine = CardZoneEngine::new(EngineConfig::new().with_seed(42));
    for (i, name) in players.iter().enumerate() {
        engine
            .initialize_player(PlayerId::new(*name), CharacterId::ALL[i % 4], i == 0)
            .unwrap();
    }
    engine
}

fn full_turn(engine: &mut CardZoneEngine, player: &PlayerId) {
    let hand: Vec<_> = engine
        .get_player_state(player)
        .unwrap()
        .zone(Zone::Hand)
        .ids()
        .cloned()
        .collect();
    engine.move_cards_to_active(player, &hand).unwrap();
    engine.move_active_to_discard(player).unwrap();
    engine.draw_cards(player, 3).unwrap();
}

fn bench_transitions(c: &mut Criterion) {
    let alice = PlayerId::new("alice");

    let mut g = c.benchmark_group("transitions");
    g.bench_function("initialize_player", |b| {
        b.iter_batched(
            || CardZoneEngine::new(EngineConfig::new().with_seed(1)),
            |mut engine| {
                engine
                    .initialize_player(alice.clone(), CharacterId::Burned, true)
                    .unwrap()
            },
            BatchSize::SmallInput,
        )
    });

    let mut engine = engine_with(&["alice", "bob"]);
    g.bench_function("shuffle_deck", |b| {
        b.iter(|| engine.shuffle_deck(black_box(&alice)).unwrap())
    });

    let mut engine = engine_with(&["alice", "bob"]);
    g.bench_function("full_turn", |b| {
        b.iter(|| full_turn(&mut engine, black_box(&alice)))
    });
    g.finish();
}

fn bench_queries(c: &mut Criterion) {
    let engine = engine_with(&["alice", "bob", "carol", "dave"]);
    let alice = PlayerId::new("alice");
    let bob = PlayerId::new("bob");

    c.bench_function("get_visible_cards", |b| {
        b.iter(|| engine.get_visible_cards(black_box(&alice), black_box(&bob), Zone::Hand))
    });
    c.bench_function("can_draw_cards", |b| {
        b.iter(|| engine.can_draw_cards(black_box(&alice)))
    });
}

fn bench_shared(c: &mut Criterion) {
    let shared = SharedEngine::from(engine_with(&["alice", "bob"]));
    let alice = PlayerId::new("alice");

    c.bench_function("shared_shuffle_deck", |b| {
        b.iter(|| shared.shuffle_deck(black_box(&alice)).unwrap())
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut engine = engine_with(&["alice", "bob", "carol", "dave"]);
    let mut store = InMemoryStore::new();

    let mut g = c.benchmark_group("snapshot");
    g.bench_function("save_bincode", |b| {
        b.iter(|| engine.save(&mut store).unwrap())
    });
    g.bench_function("load_bincode", |b| {
        b.iter(|| CardZoneEngine::load(black_box(&store)).unwrap())
    });
    g.bench_function("to_json", |b| {
        b.iter(|| engine.snapshot().to_json().unwrap())
    });
    g.finish();
}

criterion_group!(benches, bench_transitions, bench_queries, bench_shared, bench_snapshot);
criterion_main!(benches);
