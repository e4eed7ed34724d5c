//! Benchmarks for the exact-cover solver.
//!
//! - **`exact_cover_solve`**: solves fixed puzzles of increasing difficulty
//!   with the default cap of two solutions.
//! - **`exact_cover_fill`**: completes an empty grid of each size, the first
//!   step of generation.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench exact_cover
//! ```

use std::hint;

use cluegrid_core::{Dimension, Grid};
use cluegrid_solver::ExactCoverSolver;
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const PUZZLES: [(&str, &str); 2] = [
    (
        "standard",
        "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79",
    ),
    (
        "hard",
        "8__________36______7__9_2___5___7_______457_____1___3___1____68__85___1__9____4__",
    ),
];

fn bench_solve(c: &mut Criterion) {
    let mut solver = ExactCoverSolver::new(Dimension::STANDARD);
    for (param, puzzle) in PUZZLES {
        let grid: Grid = puzzle.parse().unwrap();
        c.bench_with_input(
            BenchmarkId::new("exact_cover_solve", param),
            &grid,
            |b, grid| {
                b.iter_batched_ref(
                    || hint::black_box(grid.cells().to_vec()),
                    |cells| hint::black_box(solver.solve(cells).unwrap()),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_fill(c: &mut Criterion) {
    for box_size in [2, 3, 4] {
        let dim = Dimension::new(box_size).unwrap();
        let mut solver = ExactCoverSolver::new(dim);
        c.bench_with_input(
            BenchmarkId::new("exact_cover_fill", dim.side()),
            &dim,
            |b, &dim| {
                b.iter_batched_ref(
                    || vec![0; dim.cell_count()],
                    |cells| hint::black_box(solver.solve(cells).unwrap()),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(benches, bench_solve, bench_fill);
criterion_main!(benches);
