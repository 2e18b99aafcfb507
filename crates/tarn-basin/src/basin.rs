//! Basin flood fill.
//!
//! Starting from a seed (normally a low point), a neighbour joins the basin
//! when its height is strictly greater than the member it was reached from
//! and is not the barrier height. Admission needs a strictly increasing
//! height along every path, so no path is longer than the height range.
//!
//! The fill runs on an explicit stack with an [`IndexSet`] for membership.
//! Each coordinate is pushed at most once, which bounds the work by the
//! basin size rather than by the number of paths into it.

use indexmap::IndexSet;
use tarn_core::{Coord, DigitGrid};
use tarn_space::{Adjacency, Lattice};

/// A connected region discovered from a seed cell.
///
/// Members are unique; iteration yields them in discovery order,
/// starting with the seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Basin {
    members: IndexSet<Coord>,
}

impl Basin {
    /// The cell the fill started from.
    pub fn seed(&self) -> Coord {
        // The seed is inserted first and never removed.
        self.members[0]
    }

    /// Number of cells in the basin, seed included.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always returns `false`, a basin contains at least its seed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` belongs to the basin.
    pub fn contains(&self, coord: Coord) -> bool {
        self.members.contains(&coord)
    }

    /// Members in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.members.iter().copied()
    }

    /// Members in row-major order.
    pub fn sorted(&self) -> Vec<Coord> {
        let mut out: Vec<Coord> = self.iter().collect();
        out.sort_unstable();
        out
    }
}

/// Flood-fills basins over a height grid.
///
/// # Examples
///
/// ```
/// use tarn_core::{Coord, DigitGrid};
/// use tarn_basin::BasinExtractor;
///
/// let grid: DigitGrid = "2199\n3987\n".parse().unwrap();
/// let basin = BasinExtractor::new().extract(&grid, Coord::new(0, 1));
/// assert_eq!(basin.len(), 3);
/// assert!(basin.contains(Coord::new(1, 0)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BasinExtractor {
    barrier: u8,
}

impl BasinExtractor {
    /// Height no basin can cross unless configured otherwise.
    pub const DEFAULT_BARRIER: u8 = 9;

    /// An extractor using [`DEFAULT_BARRIER`](Self::DEFAULT_BARRIER).
    pub fn new() -> Self {
        Self {
            barrier: Self::DEFAULT_BARRIER,
        }
    }

    /// Set the barrier height (default: 9).
    pub fn with_barrier(mut self, barrier: u8) -> Self {
        self.barrier = barrier;
        self
    }

    /// The configured barrier height.
    pub fn barrier(&self) -> u8 {
        self.barrier
    }

    /// Discover the basin grown from `seed`.
    ///
    /// The seed is always a member, whatever its height.
    ///
    /// # Panics
    ///
    /// Panics if `seed` is outside the grid.
    pub fn extract(&self, grid: &DigitGrid, seed: Coord) -> Basin {
        let lattice = Lattice::of(grid);
        let mut members = IndexSet::new();
        members.insert(seed);
        let mut worklist = vec![seed];

        while let Some(cell) = worklist.pop() {
            let height = grid[cell];
            for nb in lattice.neighbours(cell, Adjacency::Orthogonal) {
                let h = grid[nb];
                if h > height && h != self.barrier && members.insert(nb) {
                    worklist.push(nb);
                }
            }
        }

        log::trace!("basin from {seed}: {} cells", members.len());
        Basin { members }
    }
}

impl Default for BasinExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Size of the basin grown from `seed` with the default barrier.
///
/// # Panics
///
/// Panics if `seed` is outside the grid.
pub fn basin_size(grid: &DigitGrid, seed: Coord) -> usize {
    BasinExtractor::new().extract(grid, seed).len()
}
