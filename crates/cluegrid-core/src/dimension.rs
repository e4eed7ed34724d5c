//! Grid geometry.
//!
//! A [`Dimension`] fixes the box size `d` of a puzzle. The side of the grid is
//! `N = d²` and it holds `N²` cells stored in row-major order.

use std::fmt;

use crate::{DimensionError, Position, ValueSet};

/// The box size of a square-box grid and everything derived from it.
///
/// # Examples
///
/// ```
/// use cluegrid_core::{Dimension, Position};
///
/// let dim = Dimension::new(4)?;
/// assert_eq!(dim.side(), 16);
/// assert_eq!(dim.cell_count(), 256);
/// assert_eq!(dim.box_index(Position::new(5, 13)), 7);
/// # Ok::<(), cluegrid_core::DimensionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    box_size: u8,
}

impl Default for Dimension {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.side())
    }
}

impl Dimension {
    /// Smallest supported box size.
    pub const MIN_BOX_SIZE: u8 = 2;
    /// Largest supported box size; `8² = 64` symbols fill a 64-bit candidate set.
    pub const MAX_BOX_SIZE: u8 = 8;
    /// The classic 9×9 grid with 3×3 boxes.
    pub const STANDARD: Self = Self { box_size: 3 };

    /// Creates a dimension from a box size.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::UnsupportedBoxSize`] if `box_size` is outside
    /// `2..=8`.
    pub fn new(box_size: u8) -> Result<Self, DimensionError> {
        if (Self::MIN_BOX_SIZE..=Self::MAX_BOX_SIZE).contains(&box_size) {
            Ok(Self { box_size })
        } else {
            Err(DimensionError::UnsupportedBoxSize {
                box_size: usize::from(box_size),
            })
        }
    }

    /// Infers the dimension from a total cell count (`d⁴`).
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError::UnsupportedCellCount`] if no supported box
    /// size produces `cells` cells.
    pub fn from_cell_count(cells: usize) -> Result<Self, DimensionError> {
        (Self::MIN_BOX_SIZE..=Self::MAX_BOX_SIZE)
            .map(|box_size| Self { box_size })
            .find(|dim| dim.cell_count() == cells)
            .ok_or(DimensionError::UnsupportedCellCount { cells })
    }

    /// Returns the box size `d`.
    #[must_use]
    #[inline]
    pub const fn box_size(self) -> u8 {
        self.box_size
    }

    /// Returns the grid side `N = d²`, which is also the number of symbols.
    #[must_use]
    #[inline]
    pub const fn side(self) -> u8 {
        self.box_size * self.box_size
    }

    /// Returns the number of cells `N²`.
    #[must_use]
    #[inline]
    pub const fn cell_count(self) -> usize {
        let side = self.side() as usize;
        side * side
    }

    /// Returns the number of houses (`3N`).
    #[must_use]
    #[inline]
    pub const fn house_count(self) -> usize {
        3 * self.side() as usize
    }

    /// Returns `true` if the position lies inside the grid.
    #[must_use]
    #[inline]
    pub const fn contains(self, pos: Position) -> bool {
        pos.row() < self.side() && pos.col() < self.side()
    }

    /// Returns `true` if `value` is a symbol of this grid (`1..=N`).
    #[must_use]
    #[inline]
    pub const fn is_value(self, value: u8) -> bool {
        value >= 1 && value <= self.side()
    }

    /// Converts a position into its row-major flat index.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn index_of(self, pos: Position) -> usize {
        assert!(
            self.contains(pos),
            "position {pos} is outside a {self} grid"
        );
        usize::from(pos.row()) * usize::from(self.side()) + usize::from(pos.col())
    }

    /// Converts a row-major flat index into a position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below [`cell_count`](Self::cell_count).
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn position_at(self, index: usize) -> Position {
        assert!(
            index < self.cell_count(),
            "cell index {index} is outside a {self} grid"
        );
        let side = usize::from(self.side());
        #[expect(clippy::cast_possible_truncation)]
        let (row, col) = ((index / side) as u8, (index % side) as u8);
        Position::new(row, col)
    }

    /// Returns the index of the box containing the position.
    ///
    /// Boxes are numbered left to right, top to bottom.
    #[must_use]
    #[inline]
    pub const fn box_index(self, pos: Position) -> u8 {
        (pos.row() / self.box_size) * self.box_size + pos.col() / self.box_size
    }

    /// Returns the top-left cell of the box.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` is not below the side.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn box_origin(self, box_index: u8) -> Position {
        assert!(
            box_index < self.side(),
            "box index {box_index} is outside a {self} grid"
        );
        Position::new(
            (box_index / self.box_size) * self.box_size,
            (box_index % self.box_size) * self.box_size,
        )
    }

    /// Returns all positions in row-major order.
    pub fn positions(self) -> impl DoubleEndedIterator<Item = Position> + ExactSizeIterator {
        (0..self.cell_count()).map(move |i| self.position_at(i))
    }

    /// Returns all symbols `1..=N` in ascending order.
    pub fn values(self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator {
        1..=self.side()
    }

    /// Returns the set of all symbols `1..=N`.
    #[must_use]
    #[inline]
    pub fn full_values(self) -> ValueSet {
        ValueSet::full(self.side())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_unsupported_box_sizes() {
        assert_eq!(
            Dimension::new(1),
            Err(DimensionError::UnsupportedBoxSize { box_size: 1 })
        );
        assert!(Dimension::new(9).is_err());
        assert!(Dimension::new(2).is_ok());
        assert!(Dimension::new(8).is_ok());
    }

    #[test]
    fn test_from_cell_count() {
        assert_eq!(Dimension::from_cell_count(81), Ok(Dimension::STANDARD));
        assert_eq!(Dimension::from_cell_count(16).unwrap().box_size(), 2);
        assert_eq!(Dimension::from_cell_count(256).unwrap().box_size(), 4);
        assert_eq!(
            Dimension::from_cell_count(80),
            Err(DimensionError::UnsupportedCellCount { cells: 80 })
        );
    }

    #[test]
    fn test_index_round_trip() {
        let dim = Dimension::new(4).unwrap();
        for (i, pos) in dim.positions().enumerate() {
            assert_eq!(dim.index_of(pos), i);
            assert_eq!(dim.position_at(i), pos);
        }
    }

    #[test]
    fn test_box_geometry() {
        let dim = Dimension::STANDARD;
        assert_eq!(dim.box_index(Position::new(0, 0)), 0);
        assert_eq!(dim.box_index(Position::new(4, 7)), 5);
        assert_eq!(dim.box_index(Position::new(8, 8)), 8);
        assert_eq!(dim.box_origin(5), Position::new(3, 6));
        assert_eq!(dim.box_origin(7), Position::new(6, 3));
    }

    #[test]
    #[should_panic(expected = "outside a 9x9 grid")]
    fn test_index_of_rejects_out_of_range() {
        let _ = Dimension::STANDARD.index_of(Position::new(9, 0));
    }

    #[test]
    fn test_values() {
        let dim = Dimension::new(2).unwrap();
        assert_eq!(dim.values().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(dim.full_values().len(), 4);
    }
}
