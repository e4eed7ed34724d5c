//! Example demonstrating puzzle generation.
//!
//! This example shows how to:
//! - Create a `PuzzleGenerator` with a `LogicSolver`
//! - Generate a puzzle for a target grading and symmetry
//! - Display the puzzle, solution, seed, and strategy counts
//! - Sample many puzzles in parallel and keep the one that uses a strategy
//!   most often
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle -- --grading moderate
//! ```
//!
//! Pick the sample that needs the listed strategies most often (case-insensitive):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --grading hard --strategy "Naked Pair" --max-tries 200
//! ```

use std::process;

use clap::Parser;
use cluegrid_core::Dimension;
use cluegrid_generator::{GeneratedPuzzle, PuzzleGenerator, Symmetry};
use cluegrid_solver::{Grading, LogicSolver, LogicSolverStats};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Target grading.
    #[arg(short, long, default_value = "easy")]
    grading: Grading,

    /// Symmetry of the given cells.
    #[arg(short, long, default_value = "rotational")]
    symmetry: Symmetry,

    /// Box size; the grid side is its square.
    #[arg(long, value_name = "D", default_value_t = 3)]
    box_size: u8,

    /// Strategy name to maximise in the solve stats. Repeatable.
    #[arg(long = "strategy", value_name = "STRATEGY", num_args = 1..)]
    strategies: Vec<String>,

    /// Puzzles to sample when filtering by strategy.
    #[arg(long, value_name = "COUNT", default_value_t = 100)]
    max_tries: usize,
}

fn main() {
    let args = Args::parse();
    let dim = match Dimension::new(args.box_size) {
        Ok(dim) => dim,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let solver = LogicSolver::with_all_strategies();

    let unknown: Vec<_> = args
        .strategies
        .iter()
        .filter(|name| strategy_index(&solver, name).is_none())
        .cloned()
        .collect();
    if !unknown.is_empty() {
        eprintln!("Unknown strategy(s): {}", unknown.join(", "));
        eprintln!("Available strategies:");
        for strategy in solver.strategies() {
            eprintln!("  {}", strategy.name());
        }
        process::exit(2);
    }

    let tries = if args.strategies.is_empty() { 1 } else { args.max_tries };
    if tries == 0 {
        eprintln!("--max-tries must be at least 1.");
        process::exit(1);
    }

    let best = (0..tries)
        .into_par_iter()
        .map_init(
            || PuzzleGenerator::new(&solver, dim),
            |generator, _| {
                let puzzle = generator.generate(args.grading, args.symmetry).ok()?;
                let stats = solve_stats(&solver, &puzzle);
                let score = strategies_score(&solver, &stats, &args.strategies);
                Some((puzzle, stats, score))
            },
        )
        .flatten()
        .max_by_key(|(_, _, score)| *score);

    let Some((puzzle, stats, score)) = best else {
        eprintln!("No {} puzzle could be generated.", args.grading);
        process::exit(1);
    };
    print_puzzle(&puzzle, &solver, &stats);
    if !args.strategies.is_empty() {
        println!();
        println!("Selection:");
        println!("  Strategies: {}", args.strategies.join(", "));
        println!("  Tries: {tries}");
        println!("  Best count: {score}");
    }
}

fn strategy_index(solver: &LogicSolver, name: &str) -> Option<usize> {
    solver
        .strategies()
        .iter()
        .position(|strategy| strategy.name().eq_ignore_ascii_case(name))
}

fn solve_stats(solver: &LogicSolver, puzzle: &GeneratedPuzzle) -> LogicSolverStats {
    let mut grid = puzzle.puzzle.clone();
    let report = solver.solve(&mut grid).unwrap();
    assert!(report.outcome().is_unique_solution());
    report.stats().clone()
}

fn strategies_score(solver: &LogicSolver, stats: &LogicSolverStats, names: &[String]) -> usize {
    names
        .iter()
        .filter_map(|name| strategy_index(solver, name))
        .map(|i| stats.successes()[i])
        .sum()
}

fn print_puzzle(puzzle: &GeneratedPuzzle, solver: &LogicSolver, stats: &LogicSolverStats) {
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Grading: {} (score {})", puzzle.grading, puzzle.score);
    println!("Symmetry: {}", puzzle.symmetry);
    println!();
    println!("Puzzle:");
    println!("  {}", puzzle.puzzle);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
    println!();

    println!("Stats:");
    for (strategy, count) in solver.strategies().iter().zip(stats.successes()) {
        println!("  {}: {count}", strategy.name());
    }
    println!("  total: {}", stats.total_steps());
}
