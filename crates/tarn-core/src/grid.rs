//! Rectangular row-major grid storage.

use crate::coord::Coord;
use crate::error::GridError;
use std::ops::{Index, IndexMut};

/// A rectangular grid of cells stored in row-major order.
///
/// Every grid has at least one cell and every row shares one length;
/// both invariants are checked at construction and cannot be broken
/// afterwards, since the shape is fixed for the grid's lifetime.
///
/// Indexing with a [`Coord`] outside the grid is a contract violation
/// and panics. Use [`get`](Grid::get) for a fallible lookup.
///
/// # Examples
///
/// ```
/// use tarn_core::{Coord, Grid};
///
/// let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(grid.rows(), 2);
/// assert_eq!(grid.cols(), 3);
/// assert_eq!(grid[Coord::new(1, 2)], 6);
/// assert!(grid.get(Coord::new(2, 0)).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid from nested rows.
    ///
    /// Returns [`GridError::Empty`] if there are no rows or the first row
    /// is empty, and [`GridError::RaggedRow`] for the first row whose
    /// length differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`, construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// Position of `coord` in row-major order, or `None` if out of bounds.
    pub fn rank(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then_some(coord.row * self.cols + coord.col)
    }

    /// Shared reference to the cell at `coord`, if in bounds.
    pub fn get(&self, coord: Coord) -> Option<&T> {
        self.rank(coord).map(|i| &self.cells[i])
    }

    /// Mutable reference to the cell at `coord`, if in bounds.
    pub fn get_mut(&mut self, coord: Coord) -> Option<&mut T> {
        let i = self.rank(coord)?;
        Some(&mut self.cells[i])
    }

    /// All coordinates in row-major order.
    ///
    /// The iterator is independent of the cell data, so it can be held
    /// while the grid is mutated through [`IndexMut`].
    pub fn coords(&self) -> impl Iterator<Item = Coord> + Clone + 'static {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| Coord::new(row, col)))
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Mutable cells in row-major order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.cells.iter_mut()
    }

    /// `(coord, cell)` pairs in row-major order.
    pub fn enumerate(&self) -> impl Iterator<Item = (Coord, &T)> + '_ {
        self.coords().zip(self.cells.iter())
    }

    /// The row-major cell buffer.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Build a grid of the same shape by applying `f` to every cell.
    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Copy the cells back out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.cells.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    fn rank_or_panic(&self, coord: Coord) -> usize {
        match self.rank(coord) {
            Some(i) => i,
            None => panic!(
                "coordinate {coord} out of bounds for {}x{} grid",
                self.rows, self.cols
            ),
        }
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &T {
        &self.cells[self.rank_or_panic(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut T {
        let i = self.rank_or_panic(coord);
        &mut self.cells[i]
    }
}
