use std::ops::ControlFlow;

use cluegrid_core::{CandidateStore, ConsistencyError, Grid, House, HouseMask, ValueSet};

use super::combinations::{self, MAX_SIZE};
use crate::{BoxedStrategy, DeductionStep, Grading, SolverError, Strategy};

/// Removes candidates using a hidden pair, triple, or quad.
///
/// If `k` values of a house can only go into the same `k` cells, every other
/// candidate is removed from those cells.
#[derive(Debug, Clone, Copy)]
pub struct HiddenSubset {
    size: usize,
}

impl HiddenSubset {
    /// Creates a hidden subset strategy for subsets of `size` values.
    ///
    /// # Panics
    ///
    /// Panics unless `size` is between 2 and 4.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        assert!(size >= 2 && size <= MAX_SIZE, "hidden subset size must be 2..=4");
        Self { size }
    }

    /// Hidden Pair.
    #[must_use]
    pub const fn pair() -> Self {
        Self::new(2)
    }

    /// Hidden Triple.
    #[must_use]
    pub const fn triple() -> Self {
        Self::new(3)
    }

    /// Hidden Quad.
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
        let values: Vec<(u8, HouseMask)> = dim
            .full_values()
            .difference(grid.values_in(house))
            .into_iter()
            .map(|value| (value, candidates.house_mask(value, house)))
            .filter(|(_, mask)| (2..=self.size).contains(&mask.len()))
            .collect();

        let found = combinations::try_combinations(values.len(), self.size, |indices| {
            let subset: ValueSet = indices.iter().map(|&i| values[i].0).collect();
            let union = indices
                .iter()
                .fold(HouseMask::EMPTY, |acc, &i| acc | values[i].1);
            if union.len() < self.size {
                return ControlFlow::Break(Err(ConsistencyError::CandidateConstraintViolation));
            }
            if union.len() > self.size {
                return ControlFlow::Continue(());
            }

            let cells: Vec<_> = union
                .into_iter()
                .map(|offset| house.position(dim, offset))
                .collect();
            let eliminations: Vec<_> = cells
                .iter()
                .flat_map(|&pos| {
                    candidates
                        .candidates(pos)
                        .difference(subset)
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
                cells,
                eliminations,
            )))
        });
        Ok(found.transpose()?)
    }
}

impl Strategy for HiddenSubset {
    fn name(&self) -> &'static str {
        match self.size {
            2 => "Hidden Pair",
            3 => "Hidden Triple",
            _ => "Hidden Quad",
        }
    }

    fn score_weight(&self) -> u32 {
        match self.size {
            2 => 50,
            3 => 80,
            _ => 120,
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

#[cfg(test)]
mod tests {
    use cluegrid_core::{Dimension, Position};

    use super::*;
    use crate::testing::StrategyTester;

    fn confine(candidates: &mut CandidateStore, values: &[u8], cols: &[u8]) {
        for &value in values {
            for col in (0..9).filter(|col| !cols.contains(col)) {
                candidates.remove(value, Position::new(0, col));
            }
        }
    }

    #[test]
    fn test_hidden_pair_in_row() {
        let mut candidates = CandidateStore::new(Dimension::STANDARD);
        confine(&mut candidates, &[1, 2], &[0, 1]);
        StrategyTester::with_candidates(Grid::new(Dimension::STANDARD), candidates)
            .apply_once(&HiddenSubset::pair())
            .assert_removed_exact(Position::new(0, 0), 3..=9)
            .assert_removed_exact(Position::new(0, 1), 3..=9)
            .assert_no_change(Position::new(0, 2))
            .assert_no_change(Position::new(1, 0));
    }

    #[test]
    fn test_hidden_triple_in_row() {
        let mut candidates = CandidateStore::new(Dimension::STANDARD);
        confine(&mut candidates, &[4, 5, 6], &[2, 5, 8]);
        let tester = StrategyTester::with_candidates(Grid::new(Dimension::STANDARD), candidates)
            .apply_once(&HiddenSubset::triple())
            .assert_removed_exact(Position::new(0, 5), [1, 2, 3, 7, 8, 9])
            .assert_no_change(Position::new(0, 0));
        assert_eq!(tester.steps()[0].affected_cells().len(), 3);
    }

    #[test]
    fn test_no_hidden_pair_on_empty_grid() {
        StrategyTester::new(Grid::new(Dimension::STANDARD))
            .apply_once(&HiddenSubset::pair())
            .assert_step_count(0);
    }

    #[test]
    fn test_three_values_in_two_cells_is_inconsistent() {
        let grid = Grid::new(Dimension::STANDARD);
        let mut candidates = CandidateStore::new(Dimension::STANDARD);
        confine(&mut candidates, &[1, 2, 3], &[0, 1]);
        assert_eq!(
            HiddenSubset::triple().find_step(&grid, &candidates),
            Err(SolverError::Inconsistent(
                ConsistencyError::CandidateConstraintViolation
            ))
        );
    }
}
