use std::str::FromStr;

use cluegrid_core::Dimension;
use derive_more::{Display, Error};

/// Difficulty classes, from easiest to hardest.
///
/// A logic solve is graded by the hardest strategy level it needed and by its
/// accumulated score, whichever is higher. A grading also serves as a cap: a
/// strategy whose [`level`](crate::Strategy::level) is above the cap is not
/// tried.
///
/// # Examples
///
/// ```
/// use cluegrid_core::Dimension;
/// use cluegrid_solver::Grading;
///
/// assert!(Grading::Easy < Grading::Diabolic);
/// assert_eq!(Grading::from_score(100, Dimension::STANDARD), Grading::Easy);
/// assert_eq!(Grading::from_score(221, Dimension::STANDARD), Grading::Expert);
/// assert_eq!(Grading::Hard.max(Grading::from_score(100, Dimension::STANDARD)), Grading::Hard);
/// assert_eq!("expert".parse(), Ok(Grading::Expert));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display)]
pub enum Grading {
    /// Singles only.
    #[default]
    Easy,
    /// Needs locked candidates, or many singles.
    Moderate,
    /// Needs pairs.
    Hard,
    /// Needs triples or quads.
    Expert,
    /// Needs a fish.
    Diabolic,
}

/// Upper score bounds for a 9×9 grid, one per grading below `Diabolic`.
const STANDARD_THRESHOLDS: [u32; 4] = [120, 170, 220, 280];

impl Grading {
    /// All gradings in ascending order.
    pub const ALL: [Self; 5] = [
        Self::Easy,
        Self::Moderate,
        Self::Hard,
        Self::Expert,
        Self::Diabolic,
    ];

    /// Returns the highest score that still maps to this grading, or `None`
    /// for `Diabolic`.
    ///
    /// Thresholds are defined for 81 cells and scale with the cell count.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn max_score(self, dim: Dimension) -> Option<u32> {
        let base = *STANDARD_THRESHOLDS.get(self as usize)?;
        let scaled = u64::from(base) * dim.cell_count() as u64 / 81;
        Some(scaled.min(u64::from(u32::MAX)) as u32)
    }

    /// Maps an accumulated score to a grading.
    #[must_use]
    pub fn from_score(score: u32, dim: Dimension) -> Self {
        Self::ALL
            .into_iter()
            .find(|grading| grading.max_score(dim).is_none_or(|max| score <= max))
            .unwrap_or(Self::Diabolic)
    }

    /// Returns the next harder grading, if any.
    #[must_use]
    pub fn harder(self) -> Option<Self> {
        Self::ALL.get(self as usize + 1).copied()
    }
}

/// Error returned when a grading name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown grading {name:?}, expected one of easy, moderate, hard, expert, diabolic")]
pub struct ParseGradingError {
    name: String,
}

impl FromStr for Grading {
    type Err = ParseGradingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|grading| grading.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseGradingError {
                name: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_thresholds() {
        let dim = Dimension::STANDARD;
        assert_eq!(Grading::from_score(0, dim), Grading::Easy);
        assert_eq!(Grading::from_score(120, dim), Grading::Easy);
        assert_eq!(Grading::from_score(121, dim), Grading::Moderate);
        assert_eq!(Grading::from_score(170, dim), Grading::Moderate);
        assert_eq!(Grading::from_score(220, dim), Grading::Hard);
        assert_eq!(Grading::from_score(280, dim), Grading::Expert);
        assert_eq!(Grading::from_score(281, dim), Grading::Diabolic);
    }

    #[test]
    fn test_thresholds_scale_with_cell_count() {
        let small = Dimension::new(2).unwrap();
        let large = Dimension::new(4).unwrap();
        assert_eq!(Grading::Easy.max_score(small), Some(23));
        assert_eq!(Grading::Easy.max_score(large), Some(379));
        assert_eq!(Grading::Diabolic.max_score(large), None);
        assert_eq!(Grading::from_score(40, small), Grading::Hard);
        assert_eq!(Grading::from_score(100, small), Grading::Diabolic);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Diabolic".parse(), Ok(Grading::Diabolic));
        assert_eq!(" moderate ".parse(), Ok(Grading::Moderate));
        assert!("impossible".parse::<Grading>().is_err());
    }

    #[test]
    fn test_harder() {
        assert_eq!(Grading::Easy.harder(), Some(Grading::Moderate));
        assert_eq!(Grading::Diabolic.harder(), None);
    }
}
