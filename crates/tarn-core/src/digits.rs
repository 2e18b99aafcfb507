//! Digit grids: rectangular grids whose every cell is in `0..=9`.

use crate::coord::Coord;
use crate::error::GridError;
use crate::grid::Grid;
use std::ops::Deref;
use std::str::FromStr;

/// Largest value a digit cell may hold.
pub const MAX_DIGIT: u8 = 9;

/// A [`Grid<u8>`] whose cells are all decimal digits.
///
/// The range is checked once, when the grid is built, so every basin and
/// cascade operation can rely on it. A `DigitGrid` derefs to its
/// [`Grid<u8>`] for read access; there is no mutable access.
///
/// ```
/// use tarn_core::{Coord, DigitGrid};
///
/// let grid: DigitGrid = "123\n456\n".parse().unwrap();
/// assert_eq!(grid[Coord::new(1, 0)], 4);
/// assert!(DigitGrid::from_rows(vec![vec![1, 12]]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitGrid(Grid<u8>);

impl DigitGrid {
    /// Build a digit grid from nested rows.
    ///
    /// Shape checks run first, so a ragged input reports
    /// [`GridError::RaggedRow`] even if it also has out-of-range cells.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        Self::try_from(Grid::from_rows(rows)?)
    }

    /// The underlying grid.
    pub fn as_grid(&self) -> &Grid<u8> {
        &self.0
    }

    /// Unwrap into the underlying grid.
    pub fn into_inner(self) -> Grid<u8> {
        self.0
    }
}

impl TryFrom<Grid<u8>> for DigitGrid {
    type Error = GridError;

    /// Accept `grid` if no cell exceeds [`MAX_DIGIT`]; otherwise report
    /// the first offending cell in row-major order.
    fn try_from(grid: Grid<u8>) -> Result<Self, GridError> {
        if let Some((coord, &value)) = grid.enumerate().find(|&(_, &v)| v > MAX_DIGIT) {
            return Err(GridError::CellOutOfRange {
                coord,
                value,
                max: MAX_DIGIT,
            });
        }
        Ok(Self(grid))
    }
}

impl Deref for DigitGrid {
    type Target = Grid<u8>;

    fn deref(&self) -> &Grid<u8> {
        &self.0
    }
}

impl From<DigitGrid> for Grid<u8> {
    fn from(digits: DigitGrid) -> Self {
        digits.0
    }
}

/// Parses newline-delimited rows of decimal digits, one cell per character.
///
/// Leading and trailing blank (or whitespace-only) lines are ignored, as
/// is a trailing `\r` on each line. A blank line between rows is rejected
/// as a [`GridError::RaggedRow`]. Parsing stops at the first non-digit
/// character.
impl FromStr for DigitGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (i, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                if !rows.is_empty() {
                    rows.push(Vec::new());
                }
                continue;
            }
            let mut row = Vec::with_capacity(line.len());
            for (col, ch) in line.chars().enumerate() {
                let digit = ch.to_digit(10).ok_or(GridError::NonDigit {
                    line: i + 1,
                    column: col + 1,
                    found: ch,
                })?;
                // to_digit(10) is at most 9, so the cast is lossless.
                row.push(digit as u8);
            }
            rows.push(row);
        }
        // Trailing blank lines would otherwise register as empty rows.
        while rows.last().is_some_and(Vec::is_empty) {
            rows.pop();
        }
        Self::from_rows(rows)
    }
}
