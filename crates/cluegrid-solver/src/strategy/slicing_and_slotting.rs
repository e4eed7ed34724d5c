use cluegrid_core::{CandidateStore, ConsistencyError, Grid, House, Position, ValueSet};

use crate::{BoxedStrategy, DeductionStep, Grading, SolverError, Strategy};

const NAME: &str = "Slicing and Slotting";
const WEIGHT: u32 = 2;

/// Cross-hatches a box using the values already placed in the rows and
/// columns that pass through it.
///
/// When every empty cell of a box but one sees a given value in its row or
/// column, the value goes into the remaining cell. Candidates are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct SlicingAndSlotting {}

impl SlicingAndSlotting {
    /// Creates a new `SlicingAndSlotting` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for SlicingAndSlotting {
    fn name(&self) -> &'static str {
        NAME
    }

    fn score_weight(&self) -> u32 {
        WEIGHT
    }

    fn level(&self) -> Grading {
        Grading::Easy
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn find_step(
        &self,
        grid: &Grid,
        _candidates: &CandidateStore,
    ) -> Result<Option<DeductionStep>, SolverError> {
        let dim = grid.dimension();
        let row_values: Vec<ValueSet> = House::rows(dim).map(|h| grid.values_in(h)).collect();
        let col_values: Vec<ValueSet> = House::columns(dim).map(|h| grid.values_in(h)).collect();
        let sees = |pos: Position, value: u8| {
            row_values[usize::from(pos.row())].contains(value)
                || col_values[usize::from(pos.col())].contains(value)
        };

        for house in House::boxes(dim) {
            for value in dim.full_values().difference(grid.values_in(house)) {
                let mut slots = house
                    .positions(dim)
                    .filter(|&pos| grid.is_empty_at(pos) && !sees(pos, value));
                match (slots.next(), slots.next()) {
                    (None, _) => {
                        return Err(ConsistencyError::ValueMissing { value, house }.into());
                    }
                    (Some(pos), None) => {
                        let affected = slicers(grid, house, value);
                        return Ok(Some(DeductionStep::placement(
                            NAME, WEIGHT, affected, pos, value,
                        )));
                    }
                    (Some(_), Some(_)) => {}
                }
            }
        }
        Ok(None)
    }
}

/// Cells outside `house` holding `value` in the rows and columns crossing it.
fn slicers(grid: &Grid, house: House, value: u8) -> Vec<Position> {
    let dim = grid.dimension();
    let origin = dim.box_origin(house.index());
    let d = dim.box_size();
    let lines = (0..d)
        .map(|k| House::Row {
            row: origin.row() + k,
        })
        .chain((0..d).map(|k| House::Column {
            col: origin.col() + k,
        }));
    lines
        .flat_map(|line| line.positions(dim))
        .filter(|&pos| !house.contains(dim, pos) && grid.get(pos) == Some(value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StrategyTester;

    #[test]
    fn test_cross_hatches_box() {
        // 5s in rows 2, 3 and column 2 leave r1c1 as the only slot in box 1.
        let grid: Grid = "
            ___ ___ ___
            ___ 5__ ___
            ___ ___ 5__
            _5_ ___ ___
            ___ ___ ___
            __5 ___ ___
            ___ ___ ___
            ___ ___ ___
            ___ ___ ___
        "
        .parse()
        .unwrap();
        let tester = StrategyTester::new(grid)
            .apply_once(&SlicingAndSlotting::new())
            .assert_placed(Position::new(0, 0), 5);
        let step = &tester.steps()[0];
        assert_eq!(
            step.affected_cells(),
            &[
                Position::new(1, 3),
                Position::new(2, 6),
                Position::new(3, 1),
                Position::new(5, 2)
            ]
        );
    }

    #[test]
    fn test_no_step_on_empty_grid() {
        let grid: Grid = ".".repeat(81).parse().unwrap();
        StrategyTester::new(grid)
            .apply_once(&SlicingAndSlotting::new())
            .assert_step_count(0);
    }
}
