//! Exact-cover search over the cell/row/column/box constraint matrix.
//!
//! The matrix has one row per `(cell, value)` assignment and one column per
//! constraint:
//!
//! | Columns           | Constraint                     |
//! |-------------------|--------------------------------|
//! | `0 .. N²`         | cell `i` holds a value         |
//! | `N² .. 2N²`       | row `r` holds value `v`        |
//! | `2N² .. 3N²`      | column `c` holds value `v`     |
//! | `3N² .. 4N²`      | box `b` holds value `v`        |
//!
//! Nodes live in parallel index vectors. Node `0` is the root, nodes
//! `1..=4N²` are column headers, and every matrix row owns four consecutive
//! nodes after that. Searching covers and uncovers columns in place and always
//! restores the links before returning.

use cluegrid_core::{Dimension, Grid};
use derive_more::IsVariant;

use crate::SolveError;

const ROOT: u32 = 0;

/// The number of completions of a grid, capped at two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum SolutionCount {
    /// No completion exists.
    NoSolution,
    /// Exactly one completion exists.
    UniqueSolution,
    /// At least two completions exist.
    MultipleSolutions,
}

impl SolutionCount {
    fn from_count(count: usize) -> Self {
        match count {
            0 => Self::NoSolution,
            1 => Self::UniqueSolution,
            _ => Self::MultipleSolutions,
        }
    }
}

/// Toroidal link structure of the constraint matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Links {
    left: Vec<u32>,
    right: Vec<u32>,
    up: Vec<u32>,
    down: Vec<u32>,
    /// Column header of every node; headers point to themselves.
    column: Vec<u32>,
    /// Remaining rows per column, indexed by header node.
    size: Vec<u32>,
}

impl Links {
    #[expect(clippy::cast_possible_truncation)]
    fn build(dim: Dimension) -> Self {
        let n = usize::from(dim.side());
        let cells = dim.cell_count();
        let columns = 4 * cells;
        let rows = cells * n;
        let nodes = 1 + columns + 4 * rows;

        let mut links = Self {
            left: Vec::with_capacity(nodes),
            right: Vec::with_capacity(nodes),
            up: Vec::with_capacity(nodes),
            down: Vec::with_capacity(nodes),
            column: Vec::with_capacity(nodes),
            size: vec![0; 1 + columns],
        };

        // root and headers form the horizontal header ring
        for node in 0..=columns {
            let node = node as u32;
            links.left.push(if node == 0 { columns as u32 } else { node - 1 });
            links.right.push(if node as usize == columns { 0 } else { node + 1 });
            links.up.push(node);
            links.down.push(node);
            links.column.push(node);
        }

        for row in 0..rows {
            let first = links.left.len() as u32;
            for (k, header) in row_columns(dim, row).into_iter().enumerate() {
                let node = first + k as u32;
                let last = links.up[header as usize];
                links.left.push(if k == 0 { first + 3 } else { node - 1 });
                links.right.push(if k == 3 { first } else { node + 1 });
                links.up.push(last);
                links.down.push(header);
                links.column.push(header);
                links.down[last as usize] = node;
                links.up[header as usize] = node;
                links.size[header as usize] += 1;
            }
        }

        links
    }

    #[inline]
    fn cover(&mut self, header: u32) {
        let h = header as usize;
        let (l, r) = (self.left[h], self.right[h]);
        self.right[l as usize] = r;
        self.left[r as usize] = l;

        let mut i = self.down[h];
        while i != header {
            let mut j = self.right[i as usize];
            while j != i {
                let ju = j as usize;
                let (u, d) = (self.up[ju], self.down[ju]);
                self.down[u as usize] = d;
                self.up[d as usize] = u;
                self.size[self.column[ju] as usize] -= 1;
                j = self.right[ju];
            }
            i = self.down[i as usize];
        }
    }

    #[inline]
    fn uncover(&mut self, header: u32) {
        let h = header as usize;
        let mut i = self.up[h];
        while i != header {
            let mut j = self.left[i as usize];
            while j != i {
                let ju = j as usize;
                self.size[self.column[ju] as usize] += 1;
                let (u, d) = (self.up[ju], self.down[ju]);
                self.down[u as usize] = j;
                self.up[d as usize] = j;
                j = self.left[ju];
            }
            i = self.up[i as usize];
        }

        let (l, r) = (self.left[h], self.right[h]);
        self.right[l as usize] = header;
        self.left[r as usize] = header;
    }

    /// Returns the uncovered column with the fewest rows, or `None` if every
    /// column is covered.
    #[inline]
    fn choose_column(&self) -> Option<u32> {
        let mut best = None;
        let mut best_size = u32::MAX;
        let mut c = self.right[ROOT as usize];
        while c != ROOT {
            let size = self.size[c as usize];
            if size < best_size {
                best = Some(c);
                best_size = size;
                if size <= 1 {
                    break;
                }
            }
            c = self.right[c as usize];
        }
        best
    }
}

/// Header nodes of the four constraints satisfied by matrix row `row`.
#[expect(clippy::cast_possible_truncation)]
fn row_columns(dim: Dimension, row: usize) -> [u32; 4] {
    let n = usize::from(dim.side());
    let cells = dim.cell_count();
    let cell = row / n;
    let value = row % n;
    let pos = dim.position_at(cell);
    let r = usize::from(pos.row());
    let c = usize::from(pos.col());
    let b = usize::from(dim.box_index(pos));
    [
        1 + cell,
        1 + cells + r * n + value,
        1 + 2 * cells + c * n + value,
        1 + 3 * cells + b * n + value,
    ]
    .map(|header| header as u32)
}

/// A dancing-links solver for one grid dimension.
///
/// The matrix is built once in [`new`](Self::new) and reused by every call.
/// All search buffers are allocated up front, so solving does not allocate.
///
/// # Examples
///
/// ```
/// use cluegrid_core::Dimension;
/// use cluegrid_solver::{ExactCoverSolver, SolutionCount};
///
/// let mut solver = ExactCoverSolver::new(Dimension::new(2)?);
/// let mut grid = [
///     1, 2, 0, 4, //
///     0, 4, 1, 0, //
///     4, 0, 0, 1, //
///     0, 1, 4, 0,
/// ];
/// assert_eq!(solver.solve(&mut grid)?, SolutionCount::UniqueSolution);
/// assert_eq!(grid, [1, 2, 3, 4, 3, 4, 1, 2, 4, 3, 2, 1, 2, 1, 4, 3]);
///
/// let empty = [0; 16];
/// assert_eq!(solver.count_solutions(&empty, 10)?, 10);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExactCoverSolver {
    dim: Dimension,
    links: Links,
    first_row_node: u32,
    covered: Vec<bool>,
    cover_log: Vec<u32>,
    partial: Vec<u32>,
    first_solution: Vec<u32>,
    first_len: usize,
    found: usize,
    max_solutions: usize,
}

impl ExactCoverSolver {
    /// Builds the constraint matrix for a dimension.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub fn new(dim: Dimension) -> Self {
        let cells = dim.cell_count();
        let columns = 4 * cells;
        Self {
            dim,
            links: Links::build(dim),
            first_row_node: (1 + columns) as u32,
            covered: vec![false; 1 + columns],
            cover_log: Vec::with_capacity(columns),
            partial: vec![0; cells],
            first_solution: vec![0; cells],
            first_len: 0,
            found: 0,
            max_solutions: 0,
        }
    }

    /// Returns the dimension this solver was built for.
    #[must_use]
    pub fn dimension(&self) -> Dimension {
        self.dim
    }

    /// Counts completions of `grid` up to two and fills in the first one.
    ///
    /// `grid` is a flat row-major slice of `N²` cells, `0` meaning empty. It is
    /// only written to when at least one completion exists.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidSize`] if the slice length is not `N²`, or
    /// [`SolveError::ValueOutOfRange`] if a value exceeds `N`.
    pub fn solve(&mut self, grid: &mut [u8]) -> Result<SolutionCount, SolveError> {
        let count = self.run(grid, 2)?;
        if count > 0 {
            self.write_first_solution(grid);
        }
        Ok(SolutionCount::from_count(count))
    }

    /// Solves a [`Grid`] in place; see [`solve`](Self::solve).
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::InvalidSize`] if the grid has a different dimension.
    pub fn solve_grid(&mut self, grid: &mut Grid) -> Result<SolutionCount, SolveError> {
        self.solve(grid.cells_mut())
    }

    /// Counts completions of `grid` without modifying it, stopping at
    /// `max_solutions`.
    ///
    /// # Errors
    ///
    /// Same as [`solve`](Self::solve).
    pub fn count_solutions(
        &mut self,
        grid: &[u8],
        max_solutions: usize,
    ) -> Result<usize, SolveError> {
        if max_solutions == 0 {
            self.validate(grid)?;
            return Ok(0);
        }
        self.run(grid, max_solutions)
    }

    fn validate(&self, grid: &[u8]) -> Result<(), SolveError> {
        let expected = self.dim.cell_count();
        if grid.len() != expected {
            return Err(SolveError::InvalidSize {
                expected,
                actual: grid.len(),
            });
        }
        let side = self.dim.side();
        if let Some((index, &value)) = grid.iter().enumerate().find(|&(_, &v)| v > side) {
            return Err(SolveError::ValueOutOfRange { index, value, side });
        }
        Ok(())
    }

    fn run(&mut self, grid: &[u8], max_solutions: usize) -> Result<usize, SolveError> {
        self.validate(grid)?;
        self.found = 0;
        self.first_len = 0;
        self.max_solutions = max_solutions;

        if self.cover_givens(grid) {
            self.search(0);
        }
        self.uncover_givens();
        Ok(self.found)
    }

    /// Covers the columns of every given. Returns `false` on a contradiction.
    fn cover_givens(&mut self, grid: &[u8]) -> bool {
        let n = usize::from(self.dim.side());
        for (cell, &value) in grid.iter().enumerate() {
            if value == 0 {
                continue;
            }
            let row = cell * n + usize::from(value - 1);
            for header in row_columns(self.dim, row) {
                if self.covered[header as usize] {
                    return false;
                }
                self.covered[header as usize] = true;
                self.links.cover(header);
                self.cover_log.push(header);
            }
        }
        true
    }

    fn uncover_givens(&mut self) {
        while let Some(header) = self.cover_log.pop() {
            self.links.uncover(header);
            self.covered[header as usize] = false;
        }
    }

    fn search(&mut self, depth: usize) {
        let Some(header) = self.links.choose_column() else {
            self.found += 1;
            if self.found == 1 {
                self.first_solution[..depth].copy_from_slice(&self.partial[..depth]);
                self.first_len = depth;
            }
            return;
        };
        if self.links.size[header as usize] == 0 {
            return;
        }

        self.links.cover(header);
        let mut r = self.links.down[header as usize];
        while r != header {
            self.partial[depth] = r;
            let mut j = self.links.right[r as usize];
            while j != r {
                self.links.cover(self.links.column[j as usize]);
                j = self.links.right[j as usize];
            }

            self.search(depth + 1);

            let mut j = self.links.left[r as usize];
            while j != r {
                self.links.uncover(self.links.column[j as usize]);
                j = self.links.left[j as usize];
            }
            if self.found >= self.max_solutions {
                break;
            }
            r = self.links.down[r as usize];
        }
        self.links.uncover(header);
    }

    #[expect(clippy::cast_possible_truncation)]
    fn write_first_solution(&self, grid: &mut [u8]) {
        let n = usize::from(self.dim.side());
        for &node in &self.first_solution[..self.first_len] {
            let row = ((node - self.first_row_node) / 4) as usize;
            grid[row / n] = (row % n + 1) as u8;
        }
    }
}
