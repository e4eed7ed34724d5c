//! Per-cell candidate tracking.
//!
//! A [`CandidateStore`] holds, for every cell of a grid, the set of values
//! that may still be written there. After [`populate`](CandidateStore::populate)
//! every filled cell has an empty set and every empty cell holds exactly the
//! values absent from its row, column and box. Later removals only shrink
//! sets, so the store never has more candidates than the basic rules allow.
//!
//! All operations panic on out-of-range positions or values; callers are
//! expected to stay within the grid they populated from.

use crate::{ConsistencyError, Dimension, Grid, House, HouseMask, Position, ValueSet};

/// Candidate sets for every cell of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateStore {
    dim: Dimension,
    cells: Vec<ValueSet>,
}

impl CandidateStore {
    /// Creates a store in which every cell may hold every value.
    #[must_use]
    pub fn new(dim: Dimension) -> Self {
        Self {
            dim,
            cells: vec![dim.full_values(); dim.cell_count()],
        }
    }

    /// Creates a store populated from a grid.
    #[must_use]
    pub fn from_grid(grid: &Grid) -> Self {
        let mut store = Self::new(grid.dimension());
        store.populate(grid);
        store
    }

    /// Rebuilds every candidate set from the grid.
    ///
    /// The store adopts the grid's dimension, reusing its allocation when the
    /// size matches. Filled cells get an empty set; empty cells get the values
    /// not used by any peer.
    pub fn populate(&mut self, grid: &Grid) {
        let dim = grid.dimension();
        self.dim = dim;
        self.cells.clear();
        self.cells.resize(dim.cell_count(), ValueSet::EMPTY);

        let side = usize::from(dim.side());
        let mut rows = vec![ValueSet::EMPTY; side];
        let mut cols = vec![ValueSet::EMPTY; side];
        let mut boxes = vec![ValueSet::EMPTY; side];
        for pos in grid.given_positions() {
            let value = grid[pos];
            rows[usize::from(pos.row())].insert(value);
            cols[usize::from(pos.col())].insert(value);
            boxes[usize::from(dim.box_index(pos))].insert(value);
        }

        let full = dim.full_values();
        for (index, pos) in dim.positions().enumerate() {
            if !grid.is_empty_at(pos) {
                continue;
            }
            let used = rows[usize::from(pos.row())]
                | cols[usize::from(pos.col())]
                | boxes[usize::from(dim.box_index(pos))];
            self.cells[index] = full.difference(used);
        }
    }

    /// Returns the dimension of the grid this store tracks.
    #[must_use]
    #[inline]
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Returns the candidate set of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn candidates(&self, pos: Position) -> ValueSet {
        self.cells[self.dim.index_of(pos)]
    }

    /// Returns the number of candidates of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn count(&self, pos: Position) -> usize {
        self.candidates(pos).len()
    }

    /// Returns `true` if `value` is a candidate of the cell.
    ///
    /// # Panics
    ///
    /// Panics if the position or the value is out of range.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn contains(&self, value: u8, pos: Position) -> bool {
        self.check_value(value);
        self.candidates(pos).contains(value)
    }

    /// Returns the smallest candidate of a cell, if any.
    ///
    /// # Panics
    ///
    /// Panics if the position lies outside the grid.
    #[must_use]
    #[inline]
    #[track_caller]
    pub fn first_candidate(&self, pos: Position) -> Option<u8> {
        self.candidates(pos).first()
    }

    /// Removes a candidate from a cell.
    ///
    /// Returns `true` if the candidate was present.
    ///
    /// # Panics
    ///
    /// Panics if the position or the value is out of range.
    #[inline]
    #[track_caller]
    pub fn remove(&mut self, value: u8, pos: Position) -> bool {
        self.check_value(value);
        let index = self.dim.index_of(pos);
        self.cells[index].remove(value)
    }

    /// Removes a candidate from every cell of a house.
    ///
    /// Filled cells already have no candidates and are left unchanged.
    /// Returns `true` if anything was removed.
    ///
    /// # Panics
    ///
    /// Panics if the house or the value is out of range.
    #[track_caller]
    pub fn remove_from_house(&mut self, value: u8, house: House) -> bool {
        self.check_value(value);
        let dim = self.dim;
        let mut changed = false;
        for pos in house.positions(dim) {
            changed |= self.cells[dim.index_of(pos)].remove(value);
        }
        changed
    }

    /// Removes a candidate from every cell of a row.
    ///
    /// # Panics
    ///
    /// Panics if the row or the value is out of range.
    #[inline]
    #[track_caller]
    pub fn remove_from_row(&mut self, value: u8, row: u8) -> bool {
        self.remove_from_house(value, House::Row { row })
    }

    /// Removes a candidate from every cell of a column.
    ///
    /// # Panics
    ///
    /// Panics if the column or the value is out of range.
    #[inline]
    #[track_caller]
    pub fn remove_from_column(&mut self, value: u8, col: u8) -> bool {
        self.remove_from_house(value, House::Column { col })
    }

    /// Removes a candidate from every cell of a box.
    ///
    /// # Panics
    ///
    /// Panics if the box index or the value is out of range.
    #[inline]
    #[track_caller]
    pub fn remove_from_box(&mut self, value: u8, index: u8) -> bool {
        self.remove_from_house(value, House::Box { index })
    }

    /// Removes a candidate from the row, column and box of a position.
    ///
    /// # Panics
    ///
    /// Panics if the position or the value is out of range.
    #[track_caller]
    pub fn remove_from_all_regions(&mut self, value: u8, pos: Position) -> bool {
        let mut changed = false;
        for house in House::containing(self.dim, pos) {
            changed |= self.remove_from_house(value, house);
        }
        changed
    }

    /// Records that `value` was written at `pos`.
    ///
    /// The cell loses all its candidates and `value` is removed from every peer.
    ///
    /// # Panics
    ///
    /// Panics if the position or the value is out of range.
    #[track_caller]
    pub fn place(&mut self, value: u8, pos: Position) {
        self.check_value(value);
        let index = self.dim.index_of(pos);
        self.cells[index] = ValueSet::EMPTY;
        self.remove_from_all_regions(value, pos);
    }

    /// Returns the offsets within `house` of the cells that still have
    /// `value` as a candidate.
    ///
    /// # Panics
    ///
    /// Panics if the house or the value is out of range.
    #[must_use]
    #[track_caller]
    pub fn house_mask(&self, value: u8, house: House) -> HouseMask {
        self.check_value(value);
        (0..)
            .zip(house.positions(self.dim))
            .filter(|&(_, pos)| self.candidates(pos).contains(value))
            .map(|(offset, _)| offset)
            .collect()
    }

    /// Returns the candidates available to a house, that is the union of the
    /// candidate sets of its cells.
    #[must_use]
    pub fn house_candidates(&self, house: House) -> ValueSet {
        house
            .positions(self.dim)
            .fold(ValueSet::EMPTY, |acc, pos| acc | self.candidates(pos))
    }

    /// Checks the store against a grid for obvious contradictions.
    ///
    /// # Errors
    ///
    /// - [`ConsistencyError::DuplicateValue`] if a house repeats a value.
    /// - [`ConsistencyError::NoCandidates`] if an empty cell has no candidate.
    /// - [`ConsistencyError::ValueMissing`] if a value absent from a house
    ///   has no candidate cell in it.
    ///
    /// # Panics
    ///
    /// Panics if the grid dimension differs from the store's.
    #[track_caller]
    pub fn check_consistency(&self, grid: &Grid) -> Result<(), ConsistencyError> {
        assert_eq!(
            self.dim,
            grid.dimension(),
            "candidate store and grid differ in dimension"
        );
        if let Some((house, value)) = grid.find_duplicate() {
            return Err(ConsistencyError::DuplicateValue { value, house });
        }
        if let Some(position) = grid
            .empty_positions()
            .find(|&pos| self.candidates(pos).is_empty())
        {
            return Err(ConsistencyError::NoCandidates { position });
        }
        let full = self.dim.full_values();
        for house in House::all(self.dim) {
            let available = grid.values_in(house) | self.house_candidates(house);
            if let Some(value) = full.difference(available).first() {
                return Err(ConsistencyError::ValueMissing { value, house });
            }
        }
        Ok(())
    }

    #[inline]
    #[track_caller]
    fn check_value(&self, value: u8) {
        assert!(
            self.dim.is_value(value),
            "value {value} is not a symbol of a {} grid",
            self.dim
        );
    }
}
