use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::SeedableRng;

use kalah_engine::playout::random_move;
use kalah_engine::search;
use kalah_engine::*;

pub fn criterion_search_start(c: &mut Criterion) {
    // Setup
    let start = GameState::default();

    // Benchmarks

    for depth in [4, 6, 8] {
        c.bench_function(&format!("start_position: search depth {depth}"), |b| {
            b.iter(|| search::search(black_box(&start), black_box(depth)))
        });
    }

    c.bench_function("start_position: minimax depth 4", |b| {
        b.iter(|| {
            search::minimax(
                black_box(&start),
                black_box(4),
                black_box(true),
                black_box(Player::South),
            )
        })
    });
}

pub fn criterion_search_midgame(c: &mut Criterion) {
    // Setup
    let mut rng = SmallRng::seed_from_u64(42);
    let mut state = GameState::default();
    for _ in 0..10 {
        if let Some(pit) = random_move(&state, &mut rng) {
            state.apply_move(pit).unwrap();
        }
    }
    let expected = choose_best_move(&state, 8);

    // Benchmarks

    c.bench_function("midgame: choose_best_move depth 8", |b| {
        b.iter(|| {
            let best_move = choose_best_move(black_box(&state), black_box(8));
            assert_eq!(best_move, expected);
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().without_plots().sample_size(20);
    targets = criterion_search_start, criterion_search_midgame
}
criterion_main!(benches);
