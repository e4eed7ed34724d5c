//! Core data structures for square-box logic puzzles.
//!
//! This crate provides the fundamental types shared by the solving and
//! generation crates. Every type is parameterised at runtime by a
//! [`Dimension`], so the same code handles 4×4, 9×9, 16×16 and larger grids.
//!
//! # Overview
//!
//! 1. **Geometry**
//!    - [`dimension`]: box size `d`, side `N = d²`, and flat indexing
//!    - [`position`]: `(row, col)` cell coordinates
//!    - [`house`]: rows, columns and boxes, and iteration over their cells
//!
//! 2. **Containers**
//!    - [`bit_set`]: a 64-bit set parameterised by index semantics, with
//!      [`ValueSet`] (symbols `1..=N`) and [`HouseMask`] (offsets within a house)
//!    - [`grid`]: the flat cell array, `0` meaning empty
//!
//! 3. **Propagation**
//!    - [`candidate_store`]: per-cell candidate sets kept consistent with a grid
//!
//! # Examples
//!
//! ```
//! use cluegrid_core::{CandidateStore, Dimension, Grid, Position};
//!
//! let mut grid = Grid::new(Dimension::STANDARD);
//! grid.set(Position::new(4, 4), 5);
//!
//! let candidates = CandidateStore::from_grid(&grid);
//! assert!(!candidates.contains(5, Position::new(4, 0))); // same row
//! assert!(!candidates.contains(5, Position::new(3, 3))); // same box
//! assert_eq!(candidates.count(Position::new(4, 4)), 0); // filled cell
//! ```

pub mod bit_set;
pub mod candidate_store;
pub mod dimension;
mod error;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    bit_set::{BitSet64, HouseMask, ValueSet},
    candidate_store::CandidateStore,
    dimension::Dimension,
    error::*,
    grid::Grid,
    house::House,
    position::Position,
};
