use std::thread::available_parallelism;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use kalah_engine::perft::*;
use kalah_engine::*;

pub fn criterion_perft_small_benchmark(c: &mut Criterion) {
    // Setup
    let start = GameState::default();
    let num_threads = available_parallelism()
        .map(|inner| inner.get())
        .unwrap_or(1);

    // Benchmarks

    c.bench_function("start_position: perft(2) threads: 1", |b| {
        b.iter(|| {
            let info = perft(black_box(&start), black_box(2), black_box(1));
            assert_eq!(info.nodes, 35);
        })
    });

    for ply in [4, 6] {
        c.bench_function(&format!("start_position: perft({ply}) threads: 1"), |b| {
            b.iter(|| perft(black_box(&start), black_box(ply), black_box(1)))
        });
        c.bench_function(
            &format!("start_position: perft({ply}) threads: {num_threads}"),
            |b| b.iter(|| perft(black_box(&start), black_box(ply), black_box(num_threads))),
        );
    }
}

/// Deep perft, many millions of paths.
pub fn criterion_perft_large_benchmark(c: &mut Criterion) {
    // Setup
    let start = GameState::default();
    let num_threads = available_parallelism()
        .map(|inner| inner.get())
        .unwrap_or(1);

    c.bench_function(
        &format!("start_position: perft(8) threads: {num_threads}"),
        |b| b.iter(|| perft(black_box(&start), black_box(8), black_box(num_threads))),
    );
}

criterion_group! {
    name = small_benches;
    config = Criterion::default().without_plots().sample_size(50);
    targets = criterion_perft_small_benchmark
}
criterion_group! {
    name = large_benches;
    config = Criterion::default().without_plots().sample_size(10);
    targets = criterion_perft_large_benchmark
}
criterion_main!(small_benches, large_benches);
