//! Rows, columns, and boxes.
//!
//! A [`House`] is one of the `3N` regions that must hold every value once.
//! [`House::all`] yields rows first, then columns, then boxes.

use std::{fmt, iter::FusedIterator};

use crate::{Dimension, Position};

/// A house of the grid: a row, a column, or a box.
///
/// Every house holds each symbol exactly once in a solved grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum House {
    /// A row identified by its index.
    Row {
        /// Row index.
        row: u8,
    },
    /// A column identified by its index.
    Column {
        /// Column index.
        col: u8,
    },
    /// A box identified by its index (left to right, top to bottom).
    Box {
        /// Box index.
        index: u8,
    },
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            House::Row { row } => write!(f, "row {}", u16::from(row) + 1),
            House::Column { col } => write!(f, "column {}", u16::from(col) + 1),
            House::Box { index } => write!(f, "box {}", u16::from(index) + 1),
        }
    }
}

impl House {
    /// Returns all rows of the grid, top to bottom.
    pub fn rows(dim: Dimension) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..dim.side()).map(|row| Self::Row { row })
    }

    /// Returns all columns of the grid, left to right.
    pub fn columns(dim: Dimension) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..dim.side()).map(|col| Self::Column { col })
    }

    /// Returns all boxes of the grid.
    pub fn boxes(dim: Dimension) -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..dim.side()).map(|index| Self::Box { index })
    }

    /// Returns all houses in row, column, box order.
    pub fn all(dim: Dimension) -> impl Iterator<Item = Self> {
        Self::rows(dim)
            .chain(Self::columns(dim))
            .chain(Self::boxes(dim))
    }

    /// Returns the three houses containing a position, in row, column, box order.
    #[must_use]
    pub fn containing(dim: Dimension, pos: Position) -> [Self; 3] {
        [
            Self::Row { row: pos.row() },
            Self::Column { col: pos.col() },
            Self::Box {
                index: dim.box_index(pos),
            },
        ]
    }

    /// Returns the index of the house among houses of the same kind.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        match self {
            House::Row { row } => row,
            House::Column { col } => col,
            House::Box { index } => index,
        }
    }

    /// Converts a cell offset within the house into an absolute [`Position`].
    ///
    /// Row cells are numbered left to right, column cells top to bottom, and
    /// box cells row-major inside the box.
    ///
    /// # Panics
    ///
    /// Panics if `offset` or the house index is not below the grid side.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn position(self, dim: Dimension, offset: u8) -> Position {
        let side = dim.side();
        assert!(
            offset < side && self.index() < side,
            "offset {offset} of {self} is outside a {dim} grid"
        );
        match self {
            House::Row { row } => Position::new(row, offset),
            House::Column { col } => Position::new(offset, col),
            House::Box { index } => {
                let origin = dim.box_origin(index);
                let d = dim.box_size();
                Position::new(origin.row() + offset / d, origin.col() + offset % d)
            }
        }
    }

    /// Returns the offset of a position within the house, if it belongs to it.
    #[must_use]
    pub fn offset_of(self, dim: Dimension, pos: Position) -> Option<u8> {
        if !dim.contains(pos) {
            return None;
        }
        match self {
            House::Row { row } => (pos.row() == row).then_some(pos.col()),
            House::Column { col } => (pos.col() == col).then_some(pos.row()),
            House::Box { index } => (dim.box_index(pos) == index).then(|| {
                let d = dim.box_size();
                (pos.row() % d) * d + pos.col() % d
            }),
        }
    }

    /// Returns `true` if the position belongs to the house.
    #[must_use]
    #[inline]
    pub fn contains(self, dim: Dimension, pos: Position) -> bool {
        self.offset_of(dim, pos).is_some()
    }

    /// Returns an iterator over the positions of the house, in offset order.
    #[must_use]
    #[inline]
    pub fn positions(self, dim: Dimension) -> HousePositions {
        HousePositions {
            dim,
            house: self,
            front: 0,
            back: dim.side(),
        }
    }
}

/// Iterator over the positions of a [`House`].
#[derive(Debug, Clone)]
pub struct HousePositions {
    dim: Dimension,
    house: House,
    front: u8,
    back: u8,
}

impl Iterator for HousePositions {
    type Item = Position;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let pos = self.house.position(self.dim, self.front);
        self.front += 1;
        Some(pos)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.back.saturating_sub(self.front));
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for HousePositions {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.house.position(self.dim, self.back))
    }
}

impl FusedIterator for HousePositions {}
impl ExactSizeIterator for HousePositions {}
