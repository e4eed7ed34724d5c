use std::ops::ControlFlow;

use cluegrid_core::{CandidateStore, ConsistencyError, Grid, House, Position, ValueSet};

use super::combinations::{self, MAX_SIZE};
use crate::{BoxedStrategy, DeductionStep, Grading, SolverError, Strategy};

/// Removes candidates using a naked pair, triple, or quad.
///
/// If `k` empty cells of a house together hold exactly `k` candidates, those
/// values must go into those cells and can be removed from every other cell
/// of the house. Fewer than `k` candidates across `k` cells, or a further cell
/// whose candidates fall inside the subset, is a contradiction.
#[derive(Debug, Clone, Copy)]
pub struct NakedSubset {
    size: usize,
}

impl NakedSubset {
    /// Creates a naked subset strategy for subsets of `size` cells.
    ///
    /// # Panics
    ///
    /// Panics unless `size` is between 2 and 4.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        assert!(size >= 2 && size <= MAX_SIZE, "naked subset size must be 2..=4");
        Self { size }
    }

    /// Naked Pair.
    #[must_use]
    pub const fn pair() -> Self {
        Self::new(2)
    }

    /// Naked Triple.
    #[must_use]
    pub const fn triple() -> Self {
        Self::new(3)
    }

    /// Naked Quad.
    #[must_use]
    pub const fn quad() -> Self {
        Self::new(4)
    }

    fn find_in_house(
        &self,
        grid: &Grid,
        candidates: &CandidateStore,
        house: House,
    ) -> Result<Option<DeductionStep>, SolverError> {
        let dim = grid.dimension();
        let empty: Vec<Position> = house
            .positions(dim)
            .filter(|&pos| grid.is_empty_at(pos))
            .collect();
        let cells: Vec<Position> = empty
            .iter()
            .copied()
            .filter(|&pos| (2..=self.size).contains(&candidates.count(pos)))
            .collect();

        let found = combinations::try_combinations(cells.len(), self.size, |indices| {
            let subset: Vec<Position> = indices.iter().map(|&i| cells[i]).collect();
            let union = subset
                .iter()
                .fold(ValueSet::EMPTY, |acc, &pos| acc | candidates.candidates(pos));
            if union.len() < self.size {
                return ControlFlow::Break(Err(ConsistencyError::CandidateConstraintViolation));
            }
            if union.len() > self.size {
                return ControlFlow::Continue(());
            }
            let inside = empty
                .iter()
                .filter(|&&pos| candidates.candidates(pos).is_subset(union))
                .count();
            if inside > self.size {
                return ControlFlow::Break(Err(ConsistencyError::CandidateConstraintViolation));
            }

            let eliminations: Vec<_> = empty
                .iter()
                .filter(|pos| !subset.contains(pos))
                .flat_map(|&pos| {
                    candidates
                        .candidates(pos)
                        .intersection(union)
                        .into_iter()
                        .map(move |value| (pos, value))
                })
                .collect();
            if eliminations.is_empty() {
                return ControlFlow::Continue(());
            }
            ControlFlow::Break(Ok(DeductionStep::elimination(
                self.name(),
                self.score_weight(),
                subset,
                eliminations,
            )))
        });
        Ok(found.transpose()?)
    }
}

impl Strategy for NakedSubset {
    fn name(&self) -> &'static str {
        match self.size {
            2 => "Naked Pair",
            3 => "Naked Triple",
            _ => "Naked Quad",
        }
    }

    fn score_weight(&self) -> u32 {
        match self.size {
            2 => 40,
            3 => 70,
            _ => 110,
        }
    }

    fn level(&self) -> Grading {
        if self.size == 2 {
            Grading::Hard
        } else {
            Grading::Expert
        }
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn find_step(
        &self,
        grid: &Grid,
        candidates: &CandidateStore,
    ) -> Result<Option<DeductionStep>, SolverError> {
        for house in House::all(grid.dimension()) {
            if let Some(step) = self.find_in_house(grid, candidates, house)? {
                return Ok(Some(step));
            }
        }
        Ok(None)
    }
}
