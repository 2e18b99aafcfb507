//! The [`Coord`] grid coordinate.

use std::fmt;

/// A zero-based `(row, col)` position in a [`Grid`](crate::Grid).
///
/// Ordering is row-major, so sorting a slice of coordinates yields the
/// same sequence as scanning the grid row by row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// Row index, counted from the top.
    pub row: usize,
    /// Column index, counted from the left.
    pub col: usize,
}

impl Coord {
    /// Create a coordinate from a row and column.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate by a signed delta on each axis.
    ///
    /// Returns `None` if either axis would go negative or overflow. Upper
    /// bounds are not checked here; see `tarn_space::Lattice` for that.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_row_major() {
        let mut coords = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        coords.sort();
        assert_eq!(
            coords,
            vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]
        );
    }

    #[test]
    fn offset_rejects_negative() {
        assert_eq!(Coord::new(0, 3).offset(-1, 0), None);
        assert_eq!(Coord::new(2, 0).offset(0, -1), None);
        assert_eq!(Coord::new(2, 3).offset(-1, 1), Some(Coord::new(1, 4)));
    }

    #[test]
    fn display_and_tuple_conversion() {
        let c: Coord = (4, 7).into();
        assert_eq!(c, Coord::new(4, 7));
        assert_eq!(c.to_string(), "(4, 7)");
    }
}
