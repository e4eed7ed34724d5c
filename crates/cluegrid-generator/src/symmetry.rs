use std::{iter, str::FromStr};

use cluegrid_core::{Dimension, Position};
use derive_more::{Display, Error};

/// The symmetry kept between given cells while clues are removed and added.
///
/// Every cell has one partner under a symmetry. Cells on the axis of a
/// mirror (or the centre of a rotation) are their own partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Symmetry {
    /// Cells are removed one at a time.
    #[default]
    #[display("none")]
    None,
    /// Half-turn rotation about the centre: `(N-1-r, N-1-c)`.
    #[display("rotational")]
    Rotational180,
    /// Mirror across the vertical axis: `(r, N-1-c)`.
    #[display("vertical")]
    VerticalMirror,
    /// Mirror across the horizontal axis: `(N-1-r, c)`.
    #[display("horizontal")]
    HorizontalMirror,
    /// Mirror across the main diagonal: `(c, r)`.
    #[display("diagonal")]
    Diagonal,
    /// Mirror across the anti-diagonal: `(N-1-c, N-1-r)`.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Symmetry {
    /// All symmetries.
    pub const ALL: [Self; 6] = [
        Self::None,
        Self::Rotational180,
        Self::VerticalMirror,
        Self::HorizontalMirror,
        Self::Diagonal,
        Self::AntiDiagonal,
    ];

    /// Returns the partner of `pos`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cluegrid_core::{Dimension, Position};
    /// use cluegrid_generator::Symmetry;
    ///
    /// let dim = Dimension::STANDARD;
    /// let pos = Position::new(1, 2);
    /// assert_eq!(Symmetry::Rotational180.partner(dim, pos), Position::new(7, 6));
    /// assert_eq!(Symmetry::AntiDiagonal.partner(dim, pos), Position::new(6, 7));
    /// assert_eq!(Symmetry::None.partner(dim, pos), pos);
    /// ```
    #[must_use]
    pub fn partner(self, dim: Dimension, pos: Position) -> Position {
        let last = dim.side() - 1;
        let (row, col) = (pos.row(), pos.col());
        match self {
            Self::None => pos,
            Self::Rotational180 => Position::new(last - row, last - col),
            Self::VerticalMirror => Position::new(row, last - col),
            Self::HorizontalMirror => Position::new(last - row, col),
            Self::Diagonal => Position::new(col, row),
            Self::AntiDiagonal => Position::new(last - col, last - row),
        }
    }

    /// Returns `pos` followed by its partner, if the partner is a different
    /// cell.
    pub fn group(self, dim: Dimension, pos: Position) -> impl Iterator<Item = Position> {
        let partner = self.partner(dim, pos);
        iter::once(pos).chain((partner != pos).then_some(partner))
    }
}

/// Error returned when a symmetry name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display(
    "unknown symmetry {name:?}, expected one of none, rotational, vertical, horizontal, diagonal, anti-diagonal"
)]
pub struct ParseSymmetryError {
    name: String,
}

impl FromStr for Symmetry {
    type Err = ParseSymmetryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|symmetry| symmetry.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSymmetryError { name: s.to_owned() })
    }
}
