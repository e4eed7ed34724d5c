//! Puzzle generation for square-box logic grids.
//!
//! [`PuzzleGenerator`] builds puzzles that have exactly one solution and a
//! requested [`Grading`](cluegrid_solver::Grading), optionally keeping the
//! given cells symmetric. All randomness comes from a [`PuzzleSeed`], so a
//! given seed, solver, and configuration always produce the same puzzle.
//!
//! # Examples
//!
//! ```
//! use cluegrid_core::Dimension;
//! use cluegrid_generator::{PuzzleGenerator, Symmetry};
//! use cluegrid_solver::{ExactCoverSolver, Grading, LogicSolver, SolutionCount};
//!
//! let solver = LogicSolver::with_all_strategies();
//! let mut generator = PuzzleGenerator::new(&solver, Dimension::STANDARD);
//! let generated = generator.generate(Grading::Easy, Symmetry::None)?;
//!
//! let mut grid = generated.puzzle.clone();
//! let mut exact = ExactCoverSolver::new(Dimension::STANDARD);
//! assert_eq!(exact.solve_grid(&mut grid)?, SolutionCount::UniqueSolution);
//! assert_eq!(grid, generated.solution);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{generator::*, seed::*, symmetry::*};

mod generator;
mod seed;
mod symmetry;
