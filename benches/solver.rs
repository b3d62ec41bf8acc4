//! Benchmarks for the Tower of Hanoi solvers.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hanoi_engine::board::new_puzzle;
use hanoi_engine::core::{BoardGeometry, PegId, PuzzleConfig, PuzzleRng, PuzzleState, ReplayDelay};
use hanoi_engine::engine::HanoiEngine;
use hanoi_engine::solver::{moves, solve, solve_iterative};

fn fresh(n: i64) -> PuzzleState {
    new_puzzle(n, &BoardGeometry::default(), &mut PuzzleRng::new(42)).unwrap()
}

/// Compare the recorded solvers across tower heights.
fn bench_recorded(c: &mut Criterion) {
    let mut group = c.benchmark_group("recorded");
    for n in [8i64, 12, 16] {
        let start = fresh(n);
        group.bench_with_input(BenchmarkId::new("recursive", n), &start, |b, s| {
            b.iter(|| solve(black_box(s), n, PegId::Left, PegId::Right, PegId::Middle))
        });
        group.bench_with_input(BenchmarkId::new("iterative", n), &start, |b, s| {
            b.iter(|| solve_iterative(black_box(s), n, PegId::Left, PegId::Right, PegId::Middle))
        });
    }
    group.finish();
}

/// Benchmark the bare move iterator, no snapshots.
fn bench_move_iter(c: &mut Criterion) {
    c.bench_function("moves_20", |b| {
        b.iter(|| moves(black_box(20), PegId::Left, PegId::Right, PegId::Middle).count())
    });
}

/// Benchmark a full solve-and-replay through the engine.
fn bench_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    group.sample_size(20);
    group.bench_function("engine_12", |b| {
        b.iter(|| {
            let mut engine =
                HanoiEngine::new(PuzzleConfig::default().with_disk_count(12)).unwrap();
            engine
                .solve_and_animate(12, ReplayDelay::from_millis(1))
                .unwrap();
            engine.run_to_completion()
        })
    });
    group.finish();
}

criterion_group!(benches, bench_recorded, bench_move_iter, bench_replay);
criterion_main!(benches);
