//! Error types for grid construction.

use crate::coord::Coord;
use std::error::Error;
use std::fmt;

/// Errors detected while building a [`Grid`](crate::Grid).
///
/// A grid is validated once at construction; no operation on a built grid
/// can produce one of these. Malformed input is always rejected whole,
/// never truncated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input has no rows, or its rows have no cells.
    Empty,
    /// A row's length differs from the first row's length.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell value lies outside the accepted digit range.
    CellOutOfRange {
        /// Position of the offending cell.
        coord: Coord,
        /// The rejected value.
        value: u8,
        /// Largest accepted value.
        max: u8,
    },
    /// A character in textual input is not a decimal digit.
    NonDigit {
        /// One-based line number in the input.
        line: usize,
        /// One-based character column within the line.
        column: usize,
        /// The offending character.
        found: char,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one cell"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            Self::CellOutOfRange { coord, value, max } => {
                write!(f, "cell {coord} has value {value}, expected 0..={max}")
            }
            Self::NonDigit {
                line,
                column,
                found,
            } => write!(f, "non-digit character {found:?} at line {line}, column {column}"),
        }
    }
}

impl Error for GridError {}
