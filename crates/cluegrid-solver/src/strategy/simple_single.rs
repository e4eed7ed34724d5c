use cluegrid_core::{CandidateStore, ConsistencyError, Grid, House, ValueSet};

use crate::{BoxedStrategy, DeductionStep, Grading, SolverError, Strategy};

const NAME: &str = "Simple Single";
const WEIGHT: u32 = 1;

/// Fills the last empty cell of a row, column or box.
///
/// Only placed values are consulted; candidates are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct SimpleSingle {}

impl SimpleSingle {
    /// Creates a new `SimpleSingle` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for SimpleSingle {
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
        for house in House::all(dim) {
            let mut empty = house.positions(dim).filter(|&pos| grid.is_empty_at(pos));
            let (Some(pos), None) = (empty.next(), empty.next()) else {
                continue;
            };
            let missing = dim.full_values().difference(grid.values_in(house));
            let Some(value) = missing.as_single() else {
                return Err(duplicate_in(grid, house).into());
            };
            let affected = house.positions(dim).filter(|&p| p != pos).collect();
            return Ok(Some(DeductionStep::placement(
                NAME, WEIGHT, affected, pos, value,
            )));
        }
        Ok(None)
    }
}

// A house with one empty cell and several missing values repeats a value.
fn duplicate_in(grid: &Grid, house: House) -> ConsistencyError {
    let mut seen = ValueSet::EMPTY;
    let value = house
        .positions(grid.dimension())
        .filter_map(|pos| grid.get(pos))
        .find(|&value| !seen.insert(value))
        .unwrap_or_default();
    ConsistencyError::DuplicateValue { value, house }
}
