//! The logic solver, which runs the strategy chain and grades the result.

use cluegrid_core::{CandidateStore, Grid};
use derive_more::IsVariant;

use crate::{BoxedStrategy, DeductionStep, Grading, SolverError, strategy};

/// How a logic solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum LogicOutcome {
    /// Every empty cell was filled by deduction.
    UniqueSolution,
    /// The enabled strategies got stuck.
    ///
    /// This does not mean the puzzle has no solution, only that it cannot be
    /// solved by logic within the grading cap.
    NoSolution,
}

/// Per-strategy counters collected during a logic solve.
///
/// Both vectors are indexed in the solver's strategy order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicSolverStats {
    runs: Vec<usize>,
    successes: Vec<usize>,
    total_steps: usize,
}

impl LogicSolverStats {
    /// Returns how often each strategy was tried.
    #[must_use]
    pub fn runs(&self) -> &[usize] {
        &self.runs
    }

    /// Returns how often each strategy produced a step.
    #[must_use]
    pub fn successes(&self) -> &[usize] {
        &self.successes
    }

    /// Returns the number of steps applied, the sum of all successes.
    #[must_use]
    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    /// Returns `true` if any strategy was applied at least once.
    #[must_use]
    pub fn has_progress(&self) -> bool {
        self.total_steps > 0
    }
}

/// The result of [`LogicSolver::solve`].
#[derive(Debug, Clone)]
pub struct LogicReport {
    outcome: LogicOutcome,
    grading: Grading,
    level: Grading,
    score: u32,
    stats: LogicSolverStats,
    candidates: CandidateStore,
}

impl LogicReport {
    /// Returns how the solve ended.
    #[must_use]
    pub fn outcome(&self) -> LogicOutcome {
        self.outcome
    }

    /// Returns the grading of the solve: the higher of [`level`](Self::level)
    /// and the grading of the accumulated score.
    ///
    /// A stuck solve is graded by the steps made so far.
    #[must_use]
    pub fn grading(&self) -> Grading {
        self.grading
    }

    /// Returns the highest level among the strategies that made a step, or
    /// `Easy` if none did.
    #[must_use]
    pub fn level(&self) -> Grading {
        self.level
    }

    /// Returns the sum of `weight × successes` over all strategies.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns the per-strategy counters.
    #[must_use]
    pub fn stats(&self) -> &LogicSolverStats {
        &self.stats
    }

    /// Returns the candidates as they were when the solve stopped.
    #[must_use]
    pub fn candidates(&self) -> &CandidateStore {
        &self.candidates
    }
}

/// A solver that applies human-style strategies in a fixed order.
///
/// Each step tries the enabled strategies from first to last and applies the
/// first that succeeds, then starts over from the first. A strategy is enabled
/// when its [`level`](crate::Strategy::level) does not exceed the grading cap.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{Dimension, Grid};
/// use cluegrid_solver::{Grading, LogicSolver};
///
/// let solver = LogicSolver::with_all_strategies().with_max_grading_level(Grading::Easy);
/// let mut grid = Grid::new(Dimension::STANDARD);
///
/// let report = solver.solve(&mut grid)?;
/// assert!(report.outcome().is_no_solution());
/// assert!(!report.stats().has_progress());
/// # Ok::<(), cluegrid_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LogicSolver {
    strategies: Vec<BoxedStrategy>,
    max_grading_level: Grading,
}

impl LogicSolver {
    /// Creates a solver from an ordered list of strategies with no grading cap.
    #[must_use]
    pub fn new(strategies: Vec<BoxedStrategy>) -> Self {
        Self {
            strategies,
            max_grading_level: Grading::Diabolic,
        }
    }

    /// Creates a solver with the default chain from
    /// [`strategy::all_strategies`].
    #[must_use]
    pub fn with_all_strategies() -> Self {
        Self::new(strategy::all_strategies())
    }

    /// Sets the grading cap used by [`solve`](Self::solve),
    /// [`step`](Self::step), and [`next_deduction`](Self::next_deduction).
    #[must_use]
    pub fn with_max_grading_level(mut self, max_grading_level: Grading) -> Self {
        self.max_grading_level = max_grading_level;
        self
    }

    /// Returns the configured grading cap.
    #[must_use]
    pub fn max_grading_level(&self) -> Grading {
        self.max_grading_level
    }

    /// Returns the strategies in application order.
    ///
    /// The slice defines the index mapping used by [`LogicSolverStats`].
    #[must_use]
    pub fn strategies(&self) -> &[BoxedStrategy] {
        &self.strategies
    }

    /// Creates zeroed statistics aligned with this solver's strategy order.
    #[must_use]
    pub fn new_stats(&self) -> LogicSolverStats {
        LogicSolverStats {
            runs: vec![0; self.strategies.len()],
            successes: vec![0; self.strategies.len()],
            total_steps: 0,
        }
    }

    /// Solves `grid` in place with the configured grading cap.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid contradicts itself,
    /// initially or after a step.
    pub fn solve(&self, grid: &mut Grid) -> Result<LogicReport, SolverError> {
        self.solve_capped(grid, self.max_grading_level)
    }

    /// Solves `grid` in place using only strategies whose level is at most
    /// `cap` (and at most the configured cap).
    ///
    /// Raising the cap never lowers the resulting grading: the chain is
    /// ordered by level, so a higher cap only adds steps after the lower cap
    /// would have stopped.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid contradicts itself,
    /// initially or after a step.
    pub fn solve_capped(&self, grid: &mut Grid, cap: Grading) -> Result<LogicReport, SolverError> {
        let cap = cap.min(self.max_grading_level);
        let mut candidates = CandidateStore::from_grid(grid);
        candidates.check_consistency(grid)?;

        let mut stats = self.new_stats();
        let mut remaining = grid.empty_count();
        let outcome = loop {
            if remaining == 0 {
                break LogicOutcome::UniqueSolution;
            }
            let Some(step) = self.step_capped(grid, &mut candidates, &mut stats, cap)? else {
                break LogicOutcome::NoSolution;
            };
            if step.outcome().is_placement() {
                remaining -= 1;
            }
        };

        let score = self.score(&stats);
        let level = self.hardest_level(&stats);
        let grading = level.max(Grading::from_score(score, grid.dimension()));
        log::trace!(
            "logic solve finished: {outcome:?} after {} steps, level {level}, score {score} ({grading})",
            stats.total_steps
        );
        Ok(LogicReport {
            outcome,
            grading,
            level,
            score,
            stats,
            candidates,
        })
    }

    /// Applies the first enabled strategy that succeeds.
    ///
    /// Returns `Ok(None)` when every enabled strategy is stuck.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the state is inconsistent
    /// before or after the step.
    pub fn step(
        &self,
        grid: &mut Grid,
        candidates: &mut CandidateStore,
        stats: &mut LogicSolverStats,
    ) -> Result<Option<DeductionStep>, SolverError> {
        candidates.check_consistency(grid)?;
        self.step_capped(grid, candidates, stats, self.max_grading_level)
    }

    /// Finds the next deduction for `grid` without modifying it.
    ///
    /// With `require_value`, elimination steps are applied to a scratch copy
    /// and the search continues until a step places a value.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the grid contradicts itself.
    pub fn next_deduction(
        &self,
        grid: &Grid,
        require_value: bool,
    ) -> Result<Option<DeductionStep>, SolverError> {
        let mut scratch = grid.clone();
        let mut candidates = CandidateStore::from_grid(grid);
        candidates.check_consistency(grid)?;

        let mut stats = self.new_stats();
        while let Some(step) =
            self.step_capped(&mut scratch, &mut candidates, &mut stats, self.max_grading_level)?
        {
            if !require_value || step.outcome().is_placement() {
                return Ok(Some(step));
            }
        }
        Ok(None)
    }

    fn step_capped(
        &self,
        grid: &mut Grid,
        candidates: &mut CandidateStore,
        stats: &mut LogicSolverStats,
        cap: Grading,
    ) -> Result<Option<DeductionStep>, SolverError> {
        debug_assert_eq!(self.strategies.len(), stats.runs.len());

        for (i, strategy) in self.strategies.iter().enumerate() {
            if strategy.level() > cap {
                continue;
            }
            stats.runs[i] += 1;
            if let Some(step) = strategy.apply(grid, candidates)? {
                stats.successes[i] += 1;
                stats.total_steps += 1;
                log::trace!("{step}");
                candidates.check_consistency(grid)?;
                return Ok(Some(step));
            }
        }
        Ok(None)
    }

    fn score(&self, stats: &LogicSolverStats) -> u32 {
        let total: u64 = self
            .strategies
            .iter()
            .zip(&stats.successes)
            .map(|(strategy, &count)| u64::from(strategy.score_weight()) * count as u64)
            .sum();
        u32::try_from(total).unwrap_or(u32::MAX)
    }

    fn hardest_level(&self, stats: &LogicSolverStats) -> Grading {
        self.strategies
            .iter()
            .zip(&stats.successes)
            .filter(|&(_, &count)| count > 0)
            .map(|(strategy, _)| strategy.level())
            .max()
            .unwrap_or_default()
    }
}
