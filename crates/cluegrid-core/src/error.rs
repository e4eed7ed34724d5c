use derive_more::{Display, Error, From};

use crate::{House, Position};

/// Errors raised when a box size does not describe a supported grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DimensionError {
    /// The box size lies outside the supported range.
    #[display("box size {box_size} is outside the supported range 2..=8")]
    UnsupportedBoxSize {
        /// The rejected box size.
        box_size: usize,
    },
    /// The number of cells is not `d⁴` for any supported box size `d`.
    #[display("{cells} cells do not form a square-box grid")]
    UnsupportedCellCount {
        /// The rejected cell count.
        cells: usize,
    },
}

/// Errors raised while building a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GridError {
    /// The number of cells does not match the configured dimension.
    #[display("grid has {actual} cells, expected {expected}")]
    #[from(ignore)]
    InvalidSize {
        /// Cell count required by the dimension.
        expected: usize,
        /// Cell count supplied by the caller.
        actual: usize,
    },
    /// A cell holds a value larger than the grid side.
    #[display("value {value} at cell {index} exceeds the grid side {side}")]
    #[from(ignore)]
    ValueOutOfRange {
        /// Flat index of the offending cell.
        index: usize,
        /// The offending value.
        value: u8,
        /// Largest permitted value.
        side: u8,
    },
    /// A character in the text notation is not a symbol or an empty marker.
    #[display("unexpected character {ch:?} in grid notation")]
    #[from(ignore)]
    InvalidCharacter {
        /// The offending character.
        ch: char,
    },
    /// The grid shape is not supported.
    #[display("{_0}")]
    Dimension(DimensionError),
}

/// Contradictions detected between a grid and its candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ConsistencyError {
    /// An empty cell has no candidate left.
    #[display("cell {position} has no remaining candidates")]
    NoCandidates {
        /// The starved cell.
        position: Position,
    },
    /// A value that is not yet placed in a house has nowhere to go.
    #[display("value {value} has no candidate cell in {house}")]
    ValueMissing {
        /// The value without a home.
        value: u8,
        /// The house lacking it.
        house: House,
    },
    /// A value is placed twice in the same house.
    #[display("value {value} appears more than once in {house}")]
    DuplicateValue {
        /// The repeated value.
        value: u8,
        /// The house containing the repeats.
        house: House,
    },
    /// A candidate pattern forces more values into a region than it has cells.
    #[display("candidate configuration violates a house constraint")]
    CandidateConstraintViolation,
}
