use cluegrid_core::ConsistencyError;
use derive_more::{Display, Error, From};

/// Input rejected by the exact-cover solver before any search happens.
///
/// These are caller mistakes; the solver never retries them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolveError {
    /// The grid slice does not hold `N²` cells for the solver's dimension.
    #[display("grid has {actual} cells, expected {expected}")]
    InvalidSize {
        /// Cell count required by the solver's dimension.
        expected: usize,
        /// Cell count supplied by the caller.
        actual: usize,
    },
    /// A cell holds a value larger than the grid side.
    #[display("value {value} at cell {index} exceeds the grid side {side}")]
    ValueOutOfRange {
        /// Flat index of the offending cell.
        index: usize,
        /// The offending value.
        value: u8,
        /// Largest permitted value.
        side: u8,
    },
}

/// Errors raised by the logic solver and its strategies.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum SolverError {
    /// The grid or its candidates contain a contradiction.
    #[display("inconsistent grid: {_0}")]
    Inconsistent(ConsistencyError),
}

#[cfg(test)]
mod tests {
    use cluegrid_core::{House, Position};

    use super::*;

    #[test]
    fn test_solver_error_wraps_consistency_error() {
        let err = SolverError::from(ConsistencyError::NoCandidates {
            position: Position::new(2, 3),
        });
        assert!(matches!(
            err,
            SolverError::Inconsistent(ConsistencyError::NoCandidates { .. })
        ));
        assert!(err.to_string().starts_with("inconsistent grid: "));

        let err: SolverError = ConsistencyError::DuplicateValue {
            value: 4,
            house: House::Row { row: 0 },
        }
        .into();
        assert_eq!(
            err,
            SolverError::Inconsistent(ConsistencyError::DuplicateValue {
                value: 4,
                house: House::Row { row: 0 },
            })
        );
    }
}
