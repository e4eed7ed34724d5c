//! Command-line front end for generating, solving, and hinting puzzles.
//!
//! Grids are given in the compact notation accepted by
//! [`Grid`]'s `FromStr`: one symbol per cell, `.`, `_`, or `0` for empty
//! cells, whitespace ignored.
//!
//! ```sh
//! cluegrid generate --grading hard --symmetry rotational
//! PUZZLE="53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! cluegrid solve "$PUZZLE"
//! cluegrid hint --require-value "$PUZZLE"
//! ```
//!
//! Set `RUST_LOG=debug` to follow generation attempts.

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use cluegrid_core::{Dimension, DimensionError, Grid};
use cluegrid_generator::{GeneratorConfig, GeneratorError, PuzzleGenerator, PuzzleSeed, Symmetry};
use cluegrid_solver::{ExactCoverSolver, Grading, LogicSolver, SolveError, SolverError};
use derive_more::{Display, Error, From};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a puzzle with a unique solution and a target grading.
    Generate(GenerateArgs),
    /// Count the solutions of a grid and grade it with the logic solver.
    Solve {
        /// The grid to solve.
        grid: Grid,
    },
    /// Show the next logical deduction for a grid.
    Hint {
        /// The grid to inspect.
        grid: Grid,
        /// Skip eliminations and report the first step that places a value.
        #[arg(long)]
        require_value: bool,
    },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Target grading: easy, moderate, hard, expert, or diabolic.
    #[arg(short, long, default_value = "easy")]
    grading: Grading,

    /// Symmetry of the given cells.
    #[arg(short, long, default_value = "none")]
    symmetry: Symmetry,

    /// Box size; the grid side is its square.
    #[arg(long, value_name = "D", default_value_t = 3)]
    box_size: u8,

    /// Seed as 64 hex digits, for reproducible output.
    #[arg(long, value_name = "HEX", conflicts_with = "phrase")]
    seed: Option<PuzzleSeed>,

    /// Text hashed into a seed.
    #[arg(long, value_name = "TEXT")]
    phrase: Option<String>,

    /// Attempts before giving up.
    #[arg(long, value_name = "N", default_value_t = GeneratorConfig::default().max_iterations)]
    max_iterations: usize,
}

#[derive(Debug, Display, Error, From)]
enum CliError {
    #[display("{_0}")]
    Dimension(DimensionError),
    #[display("{_0}")]
    Solve(SolveError),
    #[display("{_0}")]
    Solver(SolverError),
    #[display("{_0}")]
    Generator(GeneratorError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Generate(args) => generate(&args),
        Command::Solve { grid } => solve(grid),
        Command::Hint {
            grid,
            require_value,
        } => hint(&grid, require_value),
    }
}

fn generate(args: &GenerateArgs) -> Result<(), CliError> {
    let dim = Dimension::new(args.box_size)?;
    let seed = match (&args.seed, &args.phrase) {
        (Some(seed), _) => *seed,
        (None, Some(phrase)) => PuzzleSeed::from_phrase(phrase),
        (None, None) => PuzzleSeed::random(),
    };
    let solver = LogicSolver::with_all_strategies();
    let mut generator = PuzzleGenerator::new(&solver, dim).with_config(GeneratorConfig {
        max_iterations: args.max_iterations,
        ..GeneratorConfig::default()
    });
    let generated = generator.generate_with_seed(args.grading, args.symmetry, seed)?;

    println!("seed: {}", generated.seed);
    println!("grading: {} (score {})", generated.grading, generated.score);
    println!("givens: {}", generated.puzzle.given_count());
    println!();
    println!("{:#}", generated.puzzle);
    println!();
    println!("{}", generated.puzzle);
    Ok(())
}

fn solve(grid: Grid) -> Result<(), CliError> {
    let mut exact = ExactCoverSolver::new(grid.dimension());
    let mut completed = grid.clone();
    let count = exact.solve_grid(&mut completed)?;
    println!("exact cover: {count:?}");
    if count.is_unique_solution() {
        println!();
        println!("{completed:#}");
    }

    let solver = LogicSolver::with_all_strategies();
    let mut logic = grid;
    let report = solver.solve(&mut logic)?;
    println!();
    println!(
        "logic: {:?}, grading {} (level {}, score {})",
        report.outcome(),
        report.grading(),
        report.level(),
        report.score()
    );
    for (strategy, &count) in solver.strategies().iter().zip(report.stats().successes()) {
        if count > 0 {
            println!("  {}: {count}", strategy.name());
        }
    }
    Ok(())
}

fn hint(grid: &Grid, require_value: bool) -> Result<(), CliError> {
    let solver = LogicSolver::with_all_strategies();
    match solver.next_deduction(grid, require_value)? {
        Some(step) => {
            println!("{step}");
            let cells: Vec<_> = step
                .affected_cells()
                .iter()
                .map(ToString::to_string)
                .collect();
            if !cells.is_empty() {
                println!("because of: {}", cells.join(" "));
            }
        }
        None => println!("no deduction available"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    const STANDARD: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn test_command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["cluegrid", "generate"]).unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.grading, Grading::Easy);
        assert_eq!(args.symmetry, Symmetry::None);
        assert_eq!(args.box_size, 3);
        assert_eq!(args.max_iterations, 100);
    }

    #[test]
    fn test_seed_conflicts_with_phrase() {
        let seed = "00".repeat(32);
        let result = Cli::try_parse_from([
            "cluegrid",
            "generate",
            "--seed",
            seed.as_str(),
            "--phrase",
            "x",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_grid_is_rejected() {
        assert!(Cli::try_parse_from(["cluegrid", "solve", "12345"]).is_err());
    }

    #[test]
    fn test_run_commands() {
        let grid: Grid = STANDARD.parse().unwrap();
        solve(grid.clone()).unwrap();
        hint(&grid, true).unwrap();
    }

    #[test]
    fn test_invalid_box_size_fails() {
        let cli = Cli::try_parse_from(["cluegrid", "generate", "--box-size", "1"]).unwrap();
        assert!(matches!(run(cli.command), Err(CliError::Dimension(_))));
    }
}
