use std::fmt;

use cluegrid_core::{CandidateStore, ConsistencyError, Grid, Position};
use derive_more::IsVariant;

use crate::SolverError;

/// The change a deduction makes to the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum DeductionOutcome {
    /// A value is written into a cell.
    Placement {
        /// The cell that receives the value.
        position: Position,
        /// The value to write.
        value: u8,
    },
    /// Candidates are removed.
    Elimination {
        /// `(cell, value)` pairs to remove, in scan order.
        eliminations: Vec<(Position, u8)>,
    },
}

/// One successful application of a [`Strategy`](crate::Strategy).
///
/// Steps are immutable once produced. The logic solver consumes them for
/// scoring, and hint front ends use [`affected_cells`](Self::affected_cells)
/// to highlight the cells that justify the deduction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionStep {
    strategy_name: &'static str,
    score_weight: u32,
    affected_cells: Vec<Position>,
    outcome: DeductionOutcome,
}

impl DeductionStep {
    /// Creates a step that writes `value` at `position`.
    #[must_use]
    pub fn placement(
        strategy_name: &'static str,
        score_weight: u32,
        affected_cells: Vec<Position>,
        position: Position,
        value: u8,
    ) -> Self {
        Self {
            strategy_name,
            score_weight,
            affected_cells,
            outcome: DeductionOutcome::Placement { position, value },
        }
    }

    /// Creates a step that removes candidates.
    #[must_use]
    pub fn elimination(
        strategy_name: &'static str,
        score_weight: u32,
        affected_cells: Vec<Position>,
        eliminations: Vec<(Position, u8)>,
    ) -> Self {
        Self {
            strategy_name,
            score_weight,
            affected_cells,
            outcome: DeductionOutcome::Elimination { eliminations },
        }
    }

    /// Returns the name of the strategy that produced the step.
    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy_name
    }

    /// Returns the score contributed by the step.
    #[must_use]
    pub fn score_weight(&self) -> u32 {
        self.score_weight
    }

    /// Returns the cells that justify the deduction.
    #[must_use]
    pub fn affected_cells(&self) -> &[Position] {
        &self.affected_cells
    }

    /// Returns what the step changes.
    #[must_use]
    pub fn outcome(&self) -> &DeductionOutcome {
        &self.outcome
    }

    /// Returns the placed cell and value, if this step fills a cell.
    #[must_use]
    pub fn placement_value(&self) -> Option<(Position, u8)> {
        match self.outcome {
            DeductionOutcome::Placement { position, value } => Some((position, value)),
            DeductionOutcome::Elimination { .. } => None,
        }
    }

    /// Returns the eliminated `(cell, value)` pairs; empty for placements.
    #[must_use]
    pub fn eliminations(&self) -> &[(Position, u8)] {
        match &self.outcome {
            DeductionOutcome::Placement { .. } => &[],
            DeductionOutcome::Elimination { eliminations } => eliminations,
        }
    }

    /// Writes the step into a grid and its candidates.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Inconsistent`] if a placement targets a filled
    /// cell or a value that is no longer a candidate there.
    pub fn apply_to(
        &self,
        grid: &mut Grid,
        candidates: &mut CandidateStore,
    ) -> Result<(), SolverError> {
        match &self.outcome {
            &DeductionOutcome::Placement { position, value } => {
                if !grid.is_empty_at(position) || !candidates.contains(value, position) {
                    return Err(ConsistencyError::CandidateConstraintViolation.into());
                }
                grid.set(position, value);
                candidates.place(value, position);
            }
            DeductionOutcome::Elimination { eliminations } => {
                for &(position, value) in eliminations {
                    candidates.remove(value, position);
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for DeductionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.strategy_name)?;
        match &self.outcome {
            DeductionOutcome::Placement { position, value } => {
                write!(f, "{position} = {value}")
            }
            DeductionOutcome::Elimination { eliminations } => {
                for (i, (position, value)) in eliminations.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{position} <> {value}")?;
                }
                Ok(())
            }
        }
    }
}
