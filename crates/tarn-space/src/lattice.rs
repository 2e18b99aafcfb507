//! Bounded square lattice and neighbour enumeration.

use crate::adjacency::Adjacency;
use crate::error::SpaceError;
use smallvec::SmallVec;
use tarn_core::{Coord, Grid};

/// Neighbour list returned by [`Lattice::neighbours`].
///
/// Eight inline slots cover the Full rule without heap allocation.
pub type Neighbours = SmallVec<[Coord; 8]>;

/// The shape of a rectangular grid, detached from its cell data.
///
/// A `Lattice` is cheap to copy, so a simulator can keep one alongside the
/// grid it mutates without holding a borrow of that grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Lattice {
    rows: usize,
    cols: usize,
}

impl Lattice {
    /// Create a lattice with `rows * cols` cells.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0.
    pub fn new(rows: usize, cols: usize) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptySpace);
        }
        Ok(Self { rows, cols })
    }

    /// The lattice underlying `grid`.
    ///
    /// Infallible: grids are never empty.
    pub fn of<T>(grid: &Grid<T>) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
        }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether `coord` lies inside the lattice.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Validate `coord`, for callers that want an error instead of the
    /// panic [`neighbours`](Self::neighbours) raises.
    pub fn check_bounds(&self, coord: Coord) -> Result<(), SpaceError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(SpaceError::CoordOutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// In-bounds neighbours of `coord` under `rule`.
    ///
    /// Never includes `coord` itself. Order follows
    /// [`Adjacency::offsets`] with out-of-bounds entries dropped.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the lattice.
    pub fn neighbours(&self, coord: Coord, rule: Adjacency) -> Neighbours {
        assert!(
            self.contains(coord),
            "coordinate {coord} out of bounds for {}x{} lattice",
            self.rows,
            self.cols
        );
        rule.offsets()
            .iter()
            .filter_map(|&(dr, dc)| coord.offset(dr, dc))
            .filter(|n| self.contains(*n))
            .collect()
    }

    /// Largest neighbour count any cell in this lattice has under `rule`.
    ///
    /// Smaller than [`Adjacency::degree`] when the lattice is too thin to
    /// have interior cells.
    pub fn max_neighbour_degree(&self, rule: Adjacency) -> usize {
        let span = |len: usize| len.min(3) - 1;
        let (r, c) = (span(self.rows), span(self.cols));
        match rule {
            Adjacency::Orthogonal => r + c,
            Adjacency::Full => (r + 1) * (c + 1) - 1,
        }
    }

    /// All cells in row-major order.
    pub fn canonical_ordering(&self) -> Vec<Coord> {
        let mut out = Vec::with_capacity(self.cell_count());
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(Coord::new(row, col));
            }
        }
        out
    }
}

/// In-bounds neighbours of `coord` in `grid` under `rule`.
///
/// Shorthand for `Lattice::of(grid).neighbours(coord, rule)`.
///
/// # Panics
///
/// Panics if `coord` is outside the grid.
pub fn neighbours<T>(grid: &Grid<T>, coord: Coord, rule: Adjacency) -> Neighbours {
    Lattice::of(grid).neighbours(coord, rule)
}
