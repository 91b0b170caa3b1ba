//! Benchmarks for turn selection and full AI games.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_gems::ai::{choose_ai_action, rank_candidates};
use rust_gems::cards::CardRegistry;
use rust_gems::rules::{new_standard_game, PlayerSetup};
use rust_gems::simulation::{play_game, SimulationConfig};
use rust_gems::GameRng;

fn seats(count: usize) -> Vec<PlayerSetup> {
    (0..count).map(|i| PlayerSetup::ai(format!("P{}", i + 1), 1.0)).collect()
}

/// Turn selection on a fresh deal.
fn benchmark_turn_selection(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    let state = new_standard_game(&seats(4), &mut rng).unwrap();

    let mut group = c.benchmark_group("Turn Selection");
    group.bench_function("rank_candidates", |b| {
        b.iter(|| black_box(rank_candidates(black_box(&state)).unwrap().len()));
    });
    for experience in [0.0, 1.0] {
        group.bench_with_input(BenchmarkId::new("choose", experience), &experience, |b, &e| {
            let mut rng = GameRng::new(7);
            b.iter(|| black_box(choose_ai_action(&state, e, &mut rng)));
        });
    }
    group.finish();
}

/// Whole games at each table size.
fn benchmark_full_games(c: &mut Criterion) {
    let registry = CardRegistry::standard();
    let config = SimulationConfig::new();

    let mut group = c.benchmark_group("Full Game");
    for players in [2usize, 3, 4] {
        let roster = vec![1.0; players];
        group.bench_with_input(BenchmarkId::new("wise", players), &roster, |b, roster| {
            let mut seed = 0;
            b.iter(|| {
                seed += 1;
                black_box(play_game(roster, &registry, &config, &mut GameRng::new(seed)).ok())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_turn_selection, benchmark_full_games);
criterion_main!(benches);
