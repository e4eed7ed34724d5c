use cluegrid_core::{CandidateStore, ConsistencyError, Grid, House};

use crate::{BoxedStrategy, DeductionStep, Grading, SolverError, Strategy};

const NAME: &str = "Hidden Single";
const WEIGHT: u32 = 4;

/// Places a value that has only one candidate cell left in a house.
///
/// The cell itself may still have several candidates. Houses are scanned in
/// row, column, box order and values in ascending order.
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle {}

impl HiddenSingle {
    /// Creates a new `HiddenSingle` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for HiddenSingle {
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
        candidates: &CandidateStore,
    ) -> Result<Option<DeductionStep>, SolverError> {
        let dim = grid.dimension();
        for house in House::all(dim) {
            for value in dim.full_values().difference(grid.values_in(house)) {
                let mask = candidates.house_mask(value, house);
                if mask.is_empty() {
                    return Err(ConsistencyError::ValueMissing { value, house }.into());
                }
                if let Some(offset) = mask.as_single() {
                    let pos = house.position(dim, offset);
                    let affected = house.positions(dim).filter(|&p| p != pos).collect();
                    return Ok(Some(DeductionStep::placement(
                        NAME, WEIGHT, affected, pos, value,
                    )));
                }
            }
        }
        Ok(None)
    }
}
