use std::ops::ControlFlow;

use cluegrid_core::{CandidateStore, ConsistencyError, Grid, House, HouseMask, Position};

use super::combinations::{self, MAX_SIZE};
use crate::{BoxedStrategy, DeductionStep, Grading, SolverError, Strategy};

/// Removes candidates using a basic fish: X-Wing, Swordfish, or Jellyfish.
///
/// If a value's candidates in `k` base lines (rows, then columns) all fall
/// into the same `k` cover lines, the value is removed from the cover lines
/// outside the base lines.
#[derive(Debug, Clone, Copy)]
pub struct Fish {
    size: usize,
}

impl Fish {
    /// Creates a fish strategy over `size` base lines.
    ///
    /// # Panics
    ///
    /// Panics unless `size` is between 2 and 4.
    #[must_use]
    pub const fn new(size: usize) -> Self {
        assert!(size >= 2 && size <= MAX_SIZE, "fish size must be 2..=4");
        Self { size }
    }

    /// X-Wing.
    #[must_use]
    pub const fn x_wing() -> Self {
        Self::new(2)
    }

    /// Swordfish.
    #[must_use]
    pub const fn swordfish() -> Self {
        Self::new(3)
    }

    /// Jellyfish.
    #[must_use]
    pub const fn jellyfish() -> Self {
        Self::new(4)
    }

    fn find_for_value(
        &self,
        grid: &Grid,
        candidates: &CandidateStore,
        value: u8,
        by_row: bool,
    ) -> Result<Option<DeductionStep>, SolverError> {
        let dim = grid.dimension();
        let line = |index: u8| {
            if by_row {
                House::Row { row: index }
            } else {
                House::Column { col: index }
            }
        };

        let bases: Vec<(u8, HouseMask)> = (0..dim.side())
            .map(line)
            .filter(|&house| !grid.values_in(house).contains(value))
            .map(|house| (house.index(), candidates.house_mask(value, house)))
            .filter(|(_, mask)| (2..=self.size).contains(&mask.len()))
            .collect();

        let found = combinations::try_combinations(bases.len(), self.size, |indices| {
            let covers = indices
                .iter()
                .fold(HouseMask::EMPTY, |acc, &i| acc | bases[i].1);
            if covers.len() < self.size {
                return ControlFlow::Break(Err(ConsistencyError::CandidateConstraintViolation));
            }
            if covers.len() > self.size {
                return ControlFlow::Continue(());
            }

            let base_lines: Vec<u8> = indices.iter().map(|&i| bases[i].0).collect();
            let in_base = |pos: Position| {
                base_lines.contains(&if by_row { pos.row() } else { pos.col() })
            };
            let eliminations: Vec<(Position, u8)> = covers
                .into_iter()
                .map(line)
                .flat_map(|cover_line| transpose(cover_line).positions(dim))
                .filter(|&pos| !in_base(pos) && candidates.contains(value, pos))
                .map(|pos| (pos, value))
                .collect();
            if eliminations.is_empty() {
                return ControlFlow::Continue(());
            }
            let affected = base_lines
                .iter()
                .flat_map(|&index| line(index).positions(dim))
                .filter(|&pos| candidates.contains(value, pos))
                .collect();
            ControlFlow::Break(Ok(DeductionStep::elimination(
                self.name(),
                self.score_weight(),
                affected,
                eliminations,
            )))
        });
        Ok(found.transpose()?)
    }
}

/// Swaps a row for the column with the same index and vice versa.
fn transpose(line: House) -> House {
    match line {
        House::Row { row } => House::Column { col: row },
        House::Column { col } => House::Row { row: col },
        House::Box { .. } => line,
    }
}

impl Strategy for Fish {
    fn name(&self) -> &'static str {
        match self.size {
            2 => "X-Wing",
            3 => "Swordfish",
            _ => "Jellyfish",
        }
    }

    fn score_weight(&self) -> u32 {
        match self.size {
            2 => 150,
            3 => 200,
            _ => 260,
        }
    }

    fn level(&self) -> Grading {
        Grading::Diabolic
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn find_step(
        &self,
        grid: &Grid,
        candidates: &CandidateStore,
    ) -> Result<Option<DeductionStep>, SolverError> {
        let dim = grid.dimension();
        for by_row in [true, false] {
            for value in dim.values() {
                if let Some(step) = self.find_for_value(grid, candidates, value, by_row)? {
                    return Ok(Some(step));
                }
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use cluegrid_core::Dimension;

    use super::*;
    use crate::testing::StrategyTester;

    fn confine_rows(candidates: &mut CandidateStore, value: u8, lines: &[(u8, [u8; 2])]) {
        for &(row, cols) in lines {
            for col in (0..9).filter(|col| !cols.contains(col)) {
                candidates.remove(value, Position::new(row, col));
            }
        }
    }

    #[test]
    fn test_x_wing_on_rows() {
        let mut candidates = CandidateStore::new(Dimension::STANDARD);
        confine_rows(&mut candidates, 4, &[(1, [2, 7]), (5, [2, 7])]);
        let tester = StrategyTester::with_candidates(Grid::new(Dimension::STANDARD), candidates)
            .apply_once(&Fish::x_wing())
            .assert_removed_exact(Position::new(0, 2), [4])
            .assert_removed_exact(Position::new(8, 7), [4])
            .assert_no_change(Position::new(1, 2))
            .assert_no_change(Position::new(0, 3));
        assert_eq!(tester.steps()[0].affected_cells().len(), 4);
    }

    #[test]
    fn test_x_wing_on_columns() {
        let mut candidates = CandidateStore::new(Dimension::STANDARD);
        for col in [3, 6] {
            for row in (0..9).filter(|row| ![0, 4].contains(row)) {
                candidates.remove(2, Position::new(row, col));
            }
        }
        StrategyTester::with_candidates(Grid::new(Dimension::STANDARD), candidates)
            .apply_once(&Fish::x_wing())
            .assert_removed_exact(Position::new(0, 0), [2])
            .assert_removed_exact(Position::new(4, 8), [2])
            .assert_no_change(Position::new(0, 3));
    }

    #[test]
    fn test_swordfish_on_rows() {
        let mut candidates = CandidateStore::new(Dimension::STANDARD);
        confine_rows(
            &mut candidates,
            9,
            &[(0, [0, 4]), (3, [4, 8]), (6, [0, 8])],
        );
        StrategyTester::with_candidates(Grid::new(Dimension::STANDARD), candidates.clone())
            .apply_once(&Fish::x_wing())
            .assert_step_count(0);
        StrategyTester::with_candidates(Grid::new(Dimension::STANDARD), candidates)
            .apply_once(&Fish::swordfish())
            .assert_removed_exact(Position::new(1, 0), [9])
            .assert_removed_exact(Position::new(8, 4), [9])
            .assert_no_change(Position::new(3, 0));
    }

    #[test]
    fn test_three_rows_in_two_columns_is_inconsistent() {
        let grid = Grid::new(Dimension::STANDARD);
        let mut candidates = CandidateStore::new(Dimension::STANDARD);
        confine_rows(
            &mut candidates,
            9,
            &[(0, [0, 4]), (3, [0, 4]), (6, [0, 4])],
        );
        assert_eq!(
            Fish::swordfish().find_step(&grid, &candidates),
            Err(SolverError::Inconsistent(
                ConsistencyError::CandidateConstraintViolation
            ))
        );
    }
}
