use cluegrid_core::{CandidateStore, Dimension, Grid, House, Position};

use crate::{BoxedStrategy, DeductionStep, Grading, SolverError, Strategy};

const NAME: &str = "Locked Candidates";
const WEIGHT: u32 = 25;

/// Removes candidates using box-line intersections.
///
/// - **Pointing**: if a value's candidates in a box all lie on one row or
///   column, the value is removed from the rest of that line.
/// - **Claiming**: if a value's candidates in a row or column all lie in one
///   box, the value is removed from the rest of that box.
///
/// All boxes are checked for pointing before any line is checked for claiming.
#[derive(Debug, Default, Clone, Copy)]
pub struct LockedCandidates {}

impl LockedCandidates {
    /// Creates a new `LockedCandidates` strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {}
    }
}

impl LockedCandidates {
    fn pointing(grid: &Grid, candidates: &CandidateStore) -> Option<DeductionStep> {
        let dim = grid.dimension();
        for house in House::boxes(dim) {
            for value in dim.full_values().difference(grid.values_in(house)) {
                let cells = candidate_cells(candidates, house, value);
                let Some(&first) = cells.first() else {
                    continue;
                };
                let lines = [
                    House::Row { row: first.row() },
                    House::Column { col: first.col() },
                ];
                for line in lines {
                    if let Some(step) = locked_step(dim, candidates, value, &cells, line, house) {
                        return Some(step);
                    }
                }
            }
        }
        None
    }

    fn claiming(grid: &Grid, candidates: &CandidateStore) -> Option<DeductionStep> {
        let dim = grid.dimension();
        for line in House::rows(dim).chain(House::columns(dim)) {
            for value in dim.full_values().difference(grid.values_in(line)) {
                let cells = candidate_cells(candidates, line, value);
                let Some(&first) = cells.first() else {
                    continue;
                };
                let house = House::Box {
                    index: dim.box_index(first),
                };
                if let Some(step) = locked_step(dim, candidates, value, &cells, house, line) {
                    return Some(step);
                }
            }
        }
        None
    }
}

fn candidate_cells(candidates: &CandidateStore, house: House, value: u8) -> Vec<Position> {
    house
        .positions(candidates.dimension())
        .filter(|&pos| candidates.contains(value, pos))
        .collect()
}

/// If `cells` all lie in `target`, removes `value` from the cells of `target`
/// outside `source`.
fn locked_step(
    dim: Dimension,
    candidates: &CandidateStore,
    value: u8,
    cells: &[Position],
    target: House,
    source: House,
) -> Option<DeductionStep> {
    if !cells.iter().all(|&pos| target.contains(dim, pos)) {
        return None;
    }
    let eliminations: Vec<_> = target
        .positions(dim)
        .filter(|&pos| !source.contains(dim, pos) && candidates.contains(value, pos))
        .map(|pos| (pos, value))
        .collect();
    (!eliminations.is_empty())
        .then(|| DeductionStep::elimination(NAME, WEIGHT, cells.to_vec(), eliminations))
}

impl Strategy for LockedCandidates {
    fn name(&self) -> &'static str {
        NAME
    }

    fn score_weight(&self) -> u32 {
        WEIGHT
    }

    fn level(&self) -> Grading {
        Grading::Moderate
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn find_step(
        &self,
        grid: &Grid,
        candidates: &CandidateStore,
    ) -> Result<Option<DeductionStep>, SolverError> {
        Ok(Self::pointing(grid, candidates).or_else(|| Self::claiming(grid, candidates)))
    }
}
