//! The puzzle grid.
//!
//! A [`Grid`] is a flat row-major array of `N²` cells holding `0` (empty) or
//! a symbol `1..=N`. Engines receive it by reference and fill values in place
//! but never resize it.
//!
//! # Text notation
//!
//! [`Grid`] implements [`FromStr`] and [`Display`](fmt::Display) for a compact
//! notation: one character per cell, `1`-`9` then `A`-`Z` for `10..=35`,
//! and `.`, `_` or `0` for an empty cell. Whitespace is ignored, and the
//! dimension is inferred from the number of cells.
//!
//! ```
//! use cluegrid_core::{Grid, Position};
//!
//! let grid: Grid = "
//!     1_ _4
//!     _4 1_
//!     4_ _1
//!     _1 4_
//! "
//! .parse()?;
//! assert_eq!(grid.dimension().side(), 4);
//! assert_eq!(grid.get(Position::new(0, 3)), Some(4));
//! assert_eq!(grid.to_string(), "1..4.41.4..1.14.");
//! # Ok::<(), cluegrid_core::GridError>(())
//! ```

use std::{fmt, ops::Index, str::FromStr};

use crate::{Dimension, GridError, House, Position, ValueSet};

/// A square-box puzzle grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    dim: Dimension,
    cells: Vec<u8>,
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            cells: vec![0; dim.cell_count()],
        }
    }

    /// Creates a grid from flat row-major cells.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if `cells` does not hold `N²`
    /// values, or [`GridError::ValueOutOfRange`] if a value exceeds `N`.
    pub fn from_cells(dim: Dimension, cells: Vec<u8>) -> Result<Self, GridError> {
        check_cells(dim, &cells)?;
        Ok(Self { dim, cells })
    }

    /// Creates a grid from rows of cells, inferring the dimension from the
    /// number of rows.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::Dimension`] if the row count is not a supported
    /// side, and the errors of [`from_cells`](Self::from_cells) otherwise.
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[u8]>,
    {
        let dim = Dimension::from_cell_count(rows.len() * rows.len())?;
        let side = usize::from(dim.side());
        let mut cells = Vec::with_capacity(dim.cell_count());
        for row in rows {
            let row = row.as_ref();
            if row.len() != side {
                return Err(GridError::InvalidSize {
                    expected: dim.cell_count(),
                    actual: cells.len() + row.len(),
                });
            }
            cells.extend_from_slice(row);
        }
        Self::from_cells(dim, cells)
    }

    /// Returns the grid dimension.
    #[must_use]
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Returns the flat row-major cells.
    #[must_use]
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the flat row-major cells for in-place solving.
    ///
    /// Callers must keep every value within `0..=N`.
    #[must_use]
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Consumes the grid and returns its cells.
    #[must_use]
    #[inline]
    pub fn into_cells(self) -> Vec<u8> {
        self.cells
    }

    /// Returns the value at a position, or `None` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn get(&self, pos: Position) -> Option<u8> {
        let value = self.cells[self.dim.index_of(pos)];
        (value != 0).then_some(value)
    }

    /// Returns `true` if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos).is_none()
    }

    /// Writes a value into a cell.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid or `value` is not in `1..=N`.
    #[inline]
    #[track_caller]
    pub fn set(&mut self, pos: Position, value: u8) {
        assert!(
            self.dim.is_value(value),
            "value {value} is not a symbol of a {} grid",
            self.dim
        );
        let index = self.dim.index_of(pos);
        self.cells[index] = value;
    }

    /// Empties a cell, returning its previous value.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[inline]
    #[track_caller]
    pub fn clear(&mut self, pos: Position) -> Option<u8> {
        let index = self.dim.index_of(pos);
        let value = std::mem::take(&mut self.cells[index]);
        (value != 0).then_some(value)
    }

    /// Overwrites this grid with another grid of the same dimension,
    /// reusing the allocation.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[track_caller]
    pub fn copy_from(&mut self, other: &Grid) {
        assert_eq!(self.dim, other.dim, "grids differ in dimension");
        self.cells.copy_from_slice(&other.cells);
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn given_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// Returns `true` if no cell is empty.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&v| v != 0)
    }

    /// Returns the positions of filled cells in row-major order.
    pub fn given_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.dim.positions().filter(|&pos| !self.is_empty_at(pos))
    }

    /// Returns the positions of empty cells in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.dim.positions().filter(|&pos| self.is_empty_at(pos))
    }

    /// Returns the values placed in a house.
    #[must_use]
    pub fn values_in(&self, house: House) -> ValueSet {
        house
            .positions(self.dim)
            .filter_map(|pos| self.get(pos))
            .collect()
    }

    /// Returns the first house containing a repeated value, if any.
    #[must_use]
    pub fn find_duplicate(&self) -> Option<(House, u8)> {
        House::all(self.dim).find_map(|house| {
            let mut seen = ValueSet::new();
            house
                .positions(self.dim)
                .filter_map(|pos| self.get(pos))
                .find(|&value| !seen.insert(value))
                .map(|value| (house, value))
        })
    }

    /// Returns `true` if no house contains a repeated value.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.find_duplicate().is_none()
    }
}

impl Index<Position> for Grid {
    type Output = u8;

    #[inline]
    #[track_caller]
    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.dim.index_of(pos)]
    }
}

fn check_cells(dim: Dimension, cells: &[u8]) -> Result<(), GridError> {
    if cells.len() != dim.cell_count() {
        return Err(GridError::InvalidSize {
            expected: dim.cell_count(),
            actual: cells.len(),
        });
    }
    let side = dim.side();
    if let Some((index, &value)) = cells.iter().enumerate().find(|&(_, &v)| v > side) {
        return Err(GridError::ValueOutOfRange { index, value, side });
    }
    Ok(())
}

fn symbol_value(ch: char) -> Option<u8> {
    match ch {
        '.' | '_' | '0' => Some(0),
        '1'..='9' => Some(ch as u8 - b'0'),
        'A'..='Z' => Some(ch as u8 - b'A' + 10),
        _ => None,
    }
}

fn value_symbol(value: u8) -> char {
    match value {
        0 => '.',
        1..=9 => char::from(b'0' + value),
        10..=35 => char::from(b'A' + value - 10),
        _ => '?',
    }
}

impl FromStr for Grid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| symbol_value(ch).ok_or(GridError::InvalidCharacter { ch }))
            .collect::<Result<Vec<_>, _>>()?;
        let dim = Dimension::from_cell_count(cells.len())?;
        Self::from_cells(dim, cells)
    }
}

/// Formats the grid in the compact notation.
///
/// The alternate form (`{:#}`) prints one row per line with a space between
/// boxes and a blank line between bands. Values above 35 print as `?`.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = usize::from(self.dim.side());
        let d = usize::from(self.dim.box_size());
        for (i, row) in self.cells.chunks(side).enumerate() {
            if f.alternate() && i > 0 {
                writeln!(f)?;
                if i % d == 0 {
                    writeln!(f)?;
                }
            }
            for (j, &value) in row.iter().enumerate() {
                if f.alternate() && j > 0 && j % d == 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", value_symbol(value))?;
            }
        }
        Ok(())
    }
}
