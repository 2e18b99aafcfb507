//! Low-point scanning.
//!
//! A low point is a cell strictly lower than every in-bounds orthogonal
//! neighbour. Ties never qualify, so a plateau of equal values contains no
//! low points. A cell with no neighbours at all (the only cell of a 1x1
//! grid) qualifies vacuously.

use tarn_core::{Coord, DigitGrid};
use tarn_space::{Adjacency, Lattice};

/// Whether `coord` is a low point of `grid`.
///
/// # Panics
///
/// Panics if `coord` is outside the grid.
pub fn is_low_point(grid: &DigitGrid, coord: Coord) -> bool {
    let height = grid[coord];
    Lattice::of(grid)
        .neighbours(coord, Adjacency::Orthogonal)
        .iter()
        .all(|&nb| height < grid[nb])
}

/// Row-major iterator over the low points of a grid.
///
/// Created by [`low_points`]. The scan never modifies the grid, so a clone
/// taken before consuming, or a second call to [`low_points`], yields the
/// same sequence.
#[derive(Clone, Debug)]
pub struct LowPoints<'g> {
    grid: &'g DigitGrid,
    next: usize,
}

impl Iterator for LowPoints<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let cols = self.grid.cols();
        while self.next < self.grid.cell_count() {
            let coord = Coord::new(self.next / cols, self.next % cols);
            self.next += 1;
            if is_low_point(self.grid, coord) {
                return Some(coord);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.grid.cell_count() - self.next))
    }
}

impl std::iter::FusedIterator for LowPoints<'_> {}

/// Lazily scan `grid` for low points in row-major order.
///
/// # Examples
///
/// ```
/// use tarn_core::{Coord, DigitGrid};
/// use tarn_basin::low_points;
///
/// let grid: DigitGrid = "919\n191\n".parse().unwrap();
/// let found: Vec<Coord> = low_points(&grid).collect();
/// assert_eq!(found, vec![Coord::new(0, 1), Coord::new(1, 0), Coord::new(1, 2)]);
/// ```
pub fn low_points(grid: &DigitGrid) -> LowPoints<'_> {
    LowPoints { grid, next: 0 }
}

/// Collect every low point of `grid` in row-major order.
pub fn find_low_points(grid: &DigitGrid) -> Vec<Coord> {
    low_points(grid).collect()
}

/// Sum of `height + 1` over all low points.
pub fn risk_level(grid: &DigitGrid) -> u64 {
    low_points(grid).map(|c| u64::from(grid[c]) + 1).sum()
}
