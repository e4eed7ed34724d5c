//! Solvers and grading for square-box logic puzzles.
//!
//! Two engines live here:
//!
//! - [`ExactCoverSolver`]: a dancing-links search that counts completions of a
//!   partially filled grid (none, one, or more) and fills in the first one.
//!   It is the uniqueness oracle used during generation.
//! - [`LogicSolver`]: an ordered chain of human-style [`strategy`]s. Solving
//!   with it produces a difficulty score and a [`Grading`], and it can be
//!   asked for a single [`DeductionStep`] to present as a hint.
//!
//! # Examples
//!
//! ```
//! use cluegrid_core::Grid;
//! use cluegrid_solver::{ExactCoverSolver, Grading, LogicSolver, SolutionCount};
//!
//! let mut grid: Grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let mut exact = ExactCoverSolver::new(grid.dimension());
//! let mut solved = grid.clone();
//! assert_eq!(exact.solve(solved.cells_mut())?, SolutionCount::UniqueSolution);
//!
//! let report = LogicSolver::with_all_strategies().solve(&mut grid)?;
//! assert!(report.outcome().is_unique_solution());
//! assert_eq!(grid, solved);
//! assert!(report.grading() <= Grading::Diabolic);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{
    deduction_step::*, error::*, exact_cover::*, grading::*, logic_solver::*,
    strategy::{BoxedStrategy, Strategy},
};

mod deduction_step;
mod error;
mod exact_cover;
mod grading;
mod logic_solver;
pub mod strategy;

#[cfg(test)]
mod testing;
