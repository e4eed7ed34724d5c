//! Cell coordinates.

use std::fmt;

/// A cell coordinate on the grid.
///
/// Rows and columns are zero-based. The position does not know the grid
/// size; range checks happen in [`Dimension`](crate::Dimension).
///
/// Positions order row-major, which is the scan order used by every solver.
///
/// # Examples
///
/// ```
/// use cluegrid_core::Position;
///
/// let pos = Position::new(2, 7);
/// assert_eq!(pos.row(), 2);
/// assert_eq!(pos.col(), 7);
/// assert_eq!(pos.to_string(), "r3c8");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Returns the row (0-based).
    #[must_use]
    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column (0-based).
    #[must_use]
    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", u16::from(self.row) + 1, u16::from(self.col) + 1)
    }
}

impl From<(u8, u8)> for Position {
    fn from((row, col): (u8, u8)) -> Self {
        Self::new(row, col)
    }
}
