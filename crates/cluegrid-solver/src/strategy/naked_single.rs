use cluegrid_core::{CandidateStore, ConsistencyError, Grid};

use crate::{BoxedStrategy, DeductionStep, Grading, SolverError, Strategy};

const NAME: &str = "Naked Single";
const WEIGHT: u32 = 3;

/// Places the value of a cell that has exactly one candidate left.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{CandidateStore, Dimension, Grid, Position};
/// use cluegrid_solver::{Strategy as _, strategy::NakedSingle};
///
/// let mut grid = Grid::new(Dimension::STANDARD);
/// let mut candidates = CandidateStore::from_grid(&grid);
/// for value in 2..=9 {
///     candidates.remove(value, Position::new(0, 0));
/// }
///
/// let step = NakedSingle::new().apply(&mut grid, &mut candidates)?;
/// assert_eq!(step.and_then(|s| s.placement_value()), Some((Position::new(0, 0), 1)));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(1));
/// # Ok::<(), cluegrid_solver::SolverError>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle {}

impl NakedSingle {
    /// Creates a new `NakedSingle` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl Strategy for NakedSingle {
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
        for pos in grid.empty_positions() {
            let cell = candidates.candidates(pos);
            if cell.is_empty() {
                return Err(ConsistencyError::NoCandidates { position: pos }.into());
            }
            if let Some(value) = cell.as_single() {
                return Ok(Some(DeductionStep::placement(
                    NAME,
                    WEIGHT,
                    vec![pos],
                    pos,
                    value,
                )));
            }
        }
        Ok(None)
    }
}
