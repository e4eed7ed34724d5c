//! Benchmarks for puzzle generation.
//!
//! - **`generator_easy`**: generates `Easy` 9×9 puzzles with rotational
//!   symmetry, covering fill, reduction, and grading.
//! - **`generator_small`**: generates `Easy` 4×4 puzzles without symmetry.
//!
//! Fixed seeds keep every run reproducible while still covering several
//! cases.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use cluegrid_core::Dimension;
use cluegrid_generator::{PuzzleGenerator, PuzzleSeed, Symmetry};
use cluegrid_solver::{Grading, LogicSolver};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator(c: &mut Criterion, name: &str, dim: Dimension, symmetry: Symmetry) {
    let solver = LogicSolver::with_all_strategies();
    let mut generator = PuzzleGenerator::new(&solver, dim);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(BenchmarkId::new(name, format!("seed_{i}")), &seed, |b, seed| {
            b.iter_batched(
                || hint::black_box(*seed),
                |seed| generator.generate_with_seed(Grading::Easy, symmetry, seed),
                BatchSize::SmallInput,
            );
        });
    }
}

fn bench_generator_easy(c: &mut Criterion) {
    bench_generator(c, "generator_easy", Dimension::STANDARD, Symmetry::Rotational180);
}

fn bench_generator_small(c: &mut Criterion) {
    let dim = Dimension::new(2).unwrap();
    bench_generator(c, "generator_small", dim, Symmetry::None);
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(12));
    targets =
        bench_generator_easy,
        bench_generator_small
);
criterion_main!(benches);
