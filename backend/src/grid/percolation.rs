//! Percolation grid engine
//!
//! An N×N grid of sites, each either blocked or open. Sites are opened one
//! at a time and never closed again. The engine answers two questions:
//!
//! - Is a given site **full**, i.e. connected to the top row through open
//!   sites?
//! - Does the system **percolate**, i.e. is some bottom-row site full?
//!
//! # Index Layout
//!
//! ```text
//! 0                 virtual top (always open)
//! 1 ..= n*n         site (row, col) at (row - 1) * n + col
//! n*n + 1           virtual bottom (always open)
//! ```
//!
//! # Backwash
//!
//! Two disjoint-set structures are kept:
//!
//! - `percolation_uf` spans both sentinels and only answers `percolates()`
//! - `fullness_uf` spans the top sentinel and the sites, never the bottom
//!   sentinel, and only answers `is_full()`
//!
//! With a single structure the bottom sentinel would join every open
//! bottom-row site to the top as soon as the grid percolates, and those
//! sites would report full without any path upward.
//!
//! # Critical Invariants
//!
//! - Opening is monotonic; `open_count` equals the number of open sites
//! - Unions only join two open nodes (sentinels count as open)
//! - `virtual_bottom` is never unioned in `fullness_uf`

use crate::collections::UnionFind;
use thiserror::Error;

/// Errors raised by grid construction and coordinate access
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimension {n}: must be at least 1 and n² must fit in memory")]
    InvalidDimension { n: usize },

    #[error("Site ({row}, {col}) is outside the {n}x{n} grid")]
    OutOfBounds { row: usize, col: usize, n: usize },
}

/// Number of sentinel nodes appended to the site index space
const VIRTUAL_NODE_COUNT: usize = 2;

/// Index of the virtual top node in both structures
const VIRTUAL_TOP: usize = 0;

/// Largest node count whose `Vec<usize>` parent array stays within the
/// `isize::MAX` byte limit on allocations
const MAX_NODES: usize = isize::MAX as usize / std::mem::size_of::<usize>();

/// One percolation system
///
/// # Example
/// ```
/// use percolation_core_rs::Percolation;
///
/// let mut grid = Percolation::new(2).unwrap();
/// grid.open(1, 1).unwrap();
/// grid.open(2, 1).unwrap();
///
/// assert!(grid.percolates());
/// assert!(grid.is_full(2, 1).unwrap());
/// assert!(!grid.is_open(2, 2).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Percolation {
    /// Grid dimension (n × n sites)
    n: usize,

    /// Open flag per node, sentinels included
    open_sites: Vec<bool>,

    /// Number of open sites, sentinels excluded
    open_count: usize,

    /// Connectivity over top sentinel, sites and bottom sentinel
    percolation_uf: UnionFind,

    /// Connectivity over top sentinel and sites only
    fullness_uf: UnionFind,
}

impl Percolation {
    /// Create an n×n grid with every site blocked
    ///
    /// # Errors
    /// `GridError::InvalidDimension` if `n < 1`, or if `n² + 2` nodes cannot
    /// be indexed and allocated on this platform.
    pub fn new(n: usize) -> Result<Self, GridError> {
        if n < 1 {
            return Err(GridError::InvalidDimension { n });
        }

        let size = n
            .checked_mul(n)
            .and_then(|sites| sites.checked_add(VIRTUAL_NODE_COUNT))
            .filter(|&size| size <= MAX_NODES)
            .ok_or(GridError::InvalidDimension { n })?;
        let mut open_sites = vec![false; size];
        open_sites[VIRTUAL_TOP] = true;
        open_sites[size - 1] = true;

        Ok(Self {
            n,
            open_sites,
            open_count: 0,
            percolation_uf: UnionFind::new(size),
            fullness_uf: UnionFind::new(size - 1),
        })
    }

    /// Grid dimension
    pub fn grid_size(&self) -> usize {
        self.n
    }

    /// Number of sites opened so far
    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    /// Open site (row, col) if it is not open already
    ///
    /// Joins the site to every open orthogonal neighbour in both
    /// structures, to the top sentinel in both when on row 1, and to the
    /// bottom sentinel in `percolation_uf` only when on row n.
    ///
    /// # Errors
    /// `GridError::OutOfBounds` if `row` or `col` is outside `[1, n]`.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let index = self.site_index(row, col)?;
        if self.open_sites[index] {
            return Ok(());
        }

        self.open_sites[index] = true;
        self.open_count += 1;

        // North: neighbour cell, or the top sentinel from row 1
        let north = if row == 1 { VIRTUAL_TOP } else { index - self.n };
        self.join_if_open(index, north);

        // South: neighbour cell, or the bottom sentinel from row n
        if row == self.n {
            self.percolation_uf.union(index, self.virtual_bottom());
        } else {
            self.join_if_open(index, index + self.n);
        }

        if col > 1 {
            self.join_if_open(index, index - 1);
        }
        if col < self.n {
            self.join_if_open(index, index + 1);
        }

        Ok(())
    }

    /// Is site (row, col) open?
    ///
    /// # Errors
    /// `GridError::OutOfBounds` if `row` or `col` is outside `[1, n]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, GridError> {
        let index = self.site_index(row, col)?;
        Ok(self.open_sites[index])
    }

    /// Is site (row, col) full, i.e. reachable from the top row?
    ///
    /// Takes `&mut self` because `find` compresses paths.
    ///
    /// # Errors
    /// `GridError::OutOfBounds` if `row` or `col` is outside `[1, n]`.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let index = self.site_index(row, col)?;
        Ok(self.fullness_uf.connected(index, VIRTUAL_TOP))
    }

    /// Does the system percolate?
    pub fn percolates(&mut self) -> bool {
        let bottom = self.virtual_bottom();
        self.percolation_uf.connected(VIRTUAL_TOP, bottom)
    }

    fn virtual_bottom(&self) -> usize {
        self.n * self.n + 1
    }

    /// Validate a 1-indexed coordinate and map it to its linear index
    fn site_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < 1 || col < 1 || row > self.n || col > self.n {
            return Err(GridError::OutOfBounds { row, col, n: self.n });
        }
        Ok((row - 1) * self.n + col)
    }

    /// Union two nodes in both structures when `neighbour` is open
    ///
    /// `neighbour` is never the bottom sentinel.
    fn join_if_open(&mut self, index: usize, neighbour: usize) {
        if self.open_sites[neighbour] {
            self.percolation_uf.union(index, neighbour);
            self.fullness_uf.union(index, neighbour);
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::VecDeque;

    /// Flood fill from the open top-row sites through open neighbours
    fn reference_full(n: usize, open: &[Vec<bool>]) -> Vec<Vec<bool>> {
        let mut full = vec![vec![false; n]; n];
        let mut queue = VecDeque::new();
        for c in 0..n {
            if open[0][c] {
                full[0][c] = true;
                queue.push_back((0, c));
            }
        }
        while let Some((r, c)) = queue.pop_front() {
            let mut neighbours = Vec::with_capacity(4);
            if r > 0 {
                neighbours.push((r - 1, c));
            }
            if r + 1 < n {
                neighbours.push((r + 1, c));
            }
            if c > 0 {
                neighbours.push((r, c - 1));
            }
            if c + 1 < n {
                neighbours.push((r, c + 1));
            }
            for (nr, nc) in neighbours {
                if open[nr][nc] && !full[nr][nc] {
                    full[nr][nc] = true;
                    queue.push_back((nr, nc));
                }
            }
        }
        full
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn fullness_matches_flood_fill(
            n in 1_usize..7,
            opens in proptest::collection::vec((0_usize..7, 0_usize..7), 0..60),
        ) {
            let mut grid = Percolation::new(n).unwrap();
            let mut open = vec![vec![false; n]; n];
            let mut was_percolating = false;

            for &(r, c) in opens.iter().filter(|&&(r, c)| r < n && c < n) {
                grid.open(r + 1, c + 1).unwrap();
                open[r][c] = true;

                let now = grid.percolates();
                prop_assert!(!was_percolating || now, "percolation reverted");
                was_percolating = now;
            }

            let full = reference_full(n, &open);
            for r in 0..n {
                for c in 0..n {
                    prop_assert_eq!(grid.is_open(r + 1, c + 1).unwrap(), open[r][c]);
                    prop_assert_eq!(grid.is_full(r + 1, c + 1).unwrap(), full[r][c]);
                }
            }

            let expected_percolates = full[n - 1].iter().any(|&f| f);
            prop_assert_eq!(grid.percolates(), expected_percolates);

            let expected_open = open.iter().flatten().filter(|&&o| o).count();
            prop_assert_eq!(grid.number_of_open_sites(), expected_open);
        }
    }
}
