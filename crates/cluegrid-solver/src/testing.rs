//! Test utilities for strategy implementations.
//!
//! [`StrategyTester`] keeps the initial and current state of a grid and its
//! candidates, applies strategies, and offers chainable assertions about what
//! changed.

use cluegrid_core::{CandidateStore, Grid, Position, ValueSet};

use crate::{DeductionStep, Strategy};

/// Published 9×9 puzzles paired with their unique solutions.
///
/// They are the common test grid with 30 givens, Project Euler 96 grid 01,
/// Norvig's 17-clue hard puzzle, AI Escargot, and Arto Inkala's 2012 puzzle.
pub const PUBLISHED: [(&str, &str); 5] = [
    (
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079",
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179",
    ),
    (
        "003020600900305001001806400008102900700000008006708200002609500800203009005010300",
        "483921657967345821251876493548132976729564138136798245372689514814253769695417382",
    ),
    (
        "400000805030000000000700000020000060000080400000010000000603070500200000104000000",
        "417369825632158947958724316825437169791586432346912758289643571573291684164875293",
    ),
    (
        "100007090030020008009600500005300900010080002600004000300000010040000007007000300",
        "162857493534129678789643521475312986913586742628794135356478219241935867897261354",
    ),
    (
        "800000000003600000070090200050007000000045700000100030001000068008500010090000400",
        "812753649943682175675491283154237896369845721287169534521974368438526917796318452",
    ),
];

/// A test harness for verifying strategy implementations.
///
/// All methods return `self` so tests read as a chain. Assertions panic with
/// detailed messages and report the caller's location.
#[derive(Debug)]
pub struct StrategyTester {
    initial_grid: Grid,
    initial: CandidateStore,
    grid: Grid,
    candidates: CandidateStore,
    steps: Vec<DeductionStep>,
    check_find_step_consistency: bool,
}

impl StrategyTester {
    /// Creates a tester whose candidates are populated from the grid.
    pub fn new(grid: Grid) -> Self {
        let candidates = CandidateStore::from_grid(&grid);
        Self::with_candidates(grid, candidates)
    }

    /// Creates a tester from a grid and hand-crafted candidates.
    pub fn with_candidates(grid: Grid, candidates: CandidateStore) -> Self {
        Self {
            initial_grid: grid.clone(),
            initial: candidates.clone(),
            grid,
            candidates,
            steps: Vec::new(),
            check_find_step_consistency: true,
        }
    }

    /// Creates a tester from the grid notation.
    ///
    /// # Panics
    ///
    /// Panics if the string is not a valid grid.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(s.parse().unwrap())
    }

    /// Disables the `find_step`/`apply` agreement check.
    #[must_use]
    pub fn without_find_step_consistency(mut self) -> Self {
        self.check_find_step_consistency = false;
        self
    }

    /// Applies the strategy once.
    ///
    /// # Panics
    ///
    /// Panics if the strategy returns an error.
    #[track_caller]
    pub fn apply_once<S>(mut self, strategy: &S) -> Self
    where
        S: Strategy + ?Sized,
    {
        self.apply_and_check(strategy);
        self
    }

    /// Applies the strategy until it makes no more progress.
    ///
    /// # Panics
    ///
    /// Panics if the strategy returns an error.
    #[track_caller]
    pub fn apply_until_stuck<S>(mut self, strategy: &S) -> Self
    where
        S: Strategy + ?Sized,
    {
        while self.apply_and_check(strategy) {}
        self
    }

    #[track_caller]
    fn apply_and_check<S>(&mut self, strategy: &S) -> bool
    where
        S: Strategy + ?Sized,
    {
        let name = strategy.name();
        let found = strategy.find_step(&self.grid, &self.candidates).unwrap();
        let before = self.candidates.clone();
        let applied = strategy
            .apply(&mut self.grid, &mut self.candidates)
            .unwrap();
        if self.check_find_step_consistency {
            assert_eq!(
                found, applied,
                "Expected {name} to apply the step that find_step reported"
            );
        }
        match applied {
            Some(step) => {
                assert_eq!(step.strategy_name(), name);
                self.steps.push(step);
                true
            }
            None => {
                assert_eq!(
                    before, self.candidates,
                    "Expected {name} to leave candidates unchanged when it reports no step"
                );
                false
            }
        }
    }

    /// Returns the steps applied so far.
    pub fn steps(&self) -> &[DeductionStep] {
        &self.steps
    }

    /// Asserts that the number of applied steps matches.
    ///
    /// # Panics
    ///
    /// Panics if the count differs.
    #[track_caller]
    pub fn assert_step_count(self, expected: usize) -> Self {
        assert_eq!(
            self.steps.len(),
            expected,
            "Expected {expected} steps, got {:?}",
            self.steps
        );
        self
    }

    /// Asserts that a cell was empty initially and now holds `value`.
    ///
    /// # Panics
    ///
    /// Panics if the cell was not placed as expected.
    #[track_caller]
    pub fn assert_placed(self, pos: Position, value: u8) -> Self {
        assert_eq!(
            self.initial_grid.get(pos),
            None,
            "Expected initial cell at {pos} to be empty"
        );
        assert_eq!(
            self.grid.get(pos),
            Some(value),
            "Expected cell at {pos} to hold {value}, candidates are {:?}",
            self.candidates.candidates(pos)
        );
        assert!(
            self.candidates.candidates(pos).is_empty(),
            "Expected placed cell at {pos} to have no candidates"
        );
        self
    }

    /// Asserts that all of `values` were candidates initially and are gone now.
    ///
    /// Other candidates may also have been removed.
    ///
    /// # Panics
    ///
    /// Panics if any of the values is still a candidate.
    #[track_caller]
    pub fn assert_removed_includes<C>(self, pos: Position, values: C) -> Self
    where
        C: IntoIterator<Item = u8>,
    {
        let values = ValueSet::from_iter(values);
        let initial = self.initial.candidates(pos);
        let current = self.candidates.candidates(pos);
        assert_eq!(
            initial & values,
            values,
            "Expected initial candidates at {pos} to include {values:?}, but they are {initial:?}"
        );
        assert!(
            (current & values).is_empty(),
            "Expected all of {values:?} to be removed from {pos}, but {current:?} remain"
        );
        self
    }

    /// Asserts that exactly `values` were removed from a cell.
    ///
    /// # Panics
    ///
    /// Panics if the removed set differs.
    #[track_caller]
    pub fn assert_removed_exact<C>(self, pos: Position, values: C) -> Self
    where
        C: IntoIterator<Item = u8>,
    {
        let values = ValueSet::from_iter(values);
        let initial = self.initial.candidates(pos);
        let current = self.candidates.candidates(pos);
        let removed = initial.difference(current);
        assert_eq!(
            removed, values,
            "Expected exactly {values:?} to be removed from {pos}, but removed {removed:?} (initial: {initial:?}, current: {current:?})"
        );
        self
    }

    /// Asserts that a cell's value and candidates have not changed.
    ///
    /// # Panics
    ///
    /// Panics if the cell differs from its initial state.
    #[track_caller]
    pub fn assert_no_change(self, pos: Position) -> Self {
        assert_eq!(
            self.initial_grid.get(pos),
            self.grid.get(pos),
            "Expected value at {pos} to stay unchanged"
        );
        let initial = self.initial.candidates(pos);
        let current = self.candidates.candidates(pos);
        assert_eq!(
            initial, current,
            "Expected no change at {pos}, but candidates changed from {initial:?} to {current:?}"
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use cluegrid_core::Dimension;

    use super::*;
    use crate::{BoxedStrategy, Grading, SolverError};

    // Places 1 at r1c1 while the cell is empty.
    #[derive(Debug)]
    struct PlaceOneAtOrigin;

    impl Strategy for PlaceOneAtOrigin {
        fn name(&self) -> &'static str {
            "place-one"
        }

        fn score_weight(&self) -> u32 {
            1
        }

        fn level(&self) -> Grading {
            Grading::Easy
        }

        fn clone_box(&self) -> BoxedStrategy {
            Box::new(PlaceOneAtOrigin)
        }

        fn find_step(
            &self,
            grid: &Grid,
            _candidates: &CandidateStore,
        ) -> Result<Option<DeductionStep>, SolverError> {
            let pos = Position::new(0, 0);
            Ok(grid
                .is_empty_at(pos)
                .then(|| DeductionStep::placement("place-one", 1, vec![pos], pos, 1)))
        }
    }

    // Reports a step from find_step but never changes anything.
    #[derive(Debug)]
    struct InconsistentStrategy;

    impl Strategy for InconsistentStrategy {
        fn name(&self) -> &'static str {
            "inconsistent"
        }

        fn score_weight(&self) -> u32 {
            1
        }

        fn level(&self) -> Grading {
            Grading::Easy
        }

        fn clone_box(&self) -> BoxedStrategy {
            Box::new(InconsistentStrategy)
        }

        fn find_step(
            &self,
            _grid: &Grid,
            _candidates: &CandidateStore,
        ) -> Result<Option<DeductionStep>, SolverError> {
            let pos = Position::new(0, 0);
            Ok(Some(DeductionStep::placement("inconsistent", 1, vec![], pos, 1)))
        }

        fn apply(
            &self,
            _grid: &mut Grid,
            _candidates: &mut CandidateStore,
        ) -> Result<Option<DeductionStep>, SolverError> {
            Ok(None)
        }
    }

    #[test]
    fn test_apply_until_stuck_places_once() {
        StrategyTester::new(Grid::new(Dimension::STANDARD))
            .apply_until_stuck(&PlaceOneAtOrigin)
            .assert_step_count(1)
            .assert_placed(Position::new(0, 0), 1)
            .assert_removed_exact(Position::new(0, 5), [1])
            .assert_no_change(Position::new(5, 5));
    }

    #[test]
    #[should_panic(expected = "Expected inconsistent to apply the step")]
    fn test_find_step_consistency_panics_on_mismatch() {
        StrategyTester::new(Grid::new(Dimension::STANDARD)).apply_once(&InconsistentStrategy);
    }

    #[test]
    fn test_find_step_consistency_opt_out() {
        StrategyTester::new(Grid::new(Dimension::STANDARD))
            .without_find_step_consistency()
            .apply_once(&InconsistentStrategy)
            .assert_step_count(0);
    }

    #[test]
    #[should_panic(expected = "Expected no change at")]
    fn test_assert_no_change_fails_when_changed() {
        StrategyTester::new(Grid::new(Dimension::STANDARD))
            .apply_once(&PlaceOneAtOrigin)
            .assert_no_change(Position::new(0, 1));
    }

    #[test]
    #[should_panic(expected = "Expected cell at")]
    fn test_assert_placed_fails_when_not_placed() {
        StrategyTester::from_str(&".".repeat(81))
            .without_find_step_consistency()
            .apply_once(&InconsistentStrategy)
            .assert_placed(Position::new(0, 0), 1);
    }
}
