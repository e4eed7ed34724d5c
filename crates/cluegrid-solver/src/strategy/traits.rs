use std::fmt::Debug;

use cluegrid_core::{CandidateStore, Grid};

use crate::{DeductionStep, Grading, SolverError};

/// A human-style deduction strategy.
///
/// Strategies look at a grid and its candidates and report the first
/// deduction they can make, scanning in a fixed order so that results are
/// deterministic.
pub trait Strategy: Debug + Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns the score added for each successful application.
    fn score_weight(&self) -> u32;

    /// Returns the lowest grading cap at which the strategy is enabled.
    fn level(&self) -> Grading;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedStrategy;

    /// Finds the first applicable deduction without mutating anything.
    ///
    /// Returns `Ok(None)` when the strategy has nothing to contribute. An
    /// elimination step always removes at least one present candidate.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if the strategy detects a
    /// candidate configuration that no solution can satisfy.
    fn find_step(
        &self,
        grid: &Grid,
        candidates: &CandidateStore,
    ) -> Result<Option<DeductionStep>, SolverError>;

    /// Finds the first applicable deduction and applies it.
    ///
    /// Returns the applied step, or `Ok(None)` if nothing changed.
    ///
    /// # Errors
    ///
    /// Returns an error if [`find_step`](Self::find_step) fails or the step
    /// cannot be applied.
    fn apply(
        &self,
        grid: &mut Grid,
        candidates: &mut CandidateStore,
    ) -> Result<Option<DeductionStep>, SolverError> {
        let Some(step) = self.find_step(grid, candidates)? else {
            return Ok(None);
        };
        step.apply_to(grid, candidates)?;
        Ok(Some(step))
    }
}

/// A boxed strategy.
pub type BoxedStrategy = Box<dyn Strategy>;

impl Clone for BoxedStrategy {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
