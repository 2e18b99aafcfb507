//! Error types for lattice construction and coordinate validation.

use std::fmt;
use tarn_core::Coord;

/// Errors arising from lattice construction or coordinate checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpaceError {
    /// A coordinate is outside the bounds of the lattice.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: Coord,
        /// Number of rows in the lattice.
        rows: usize,
        /// Number of columns in the lattice.
        cols: usize,
    },
    /// Attempted to construct a lattice with zero cells.
    EmptySpace,
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, rows, cols } => {
                write!(f, "coordinate {coord} out of bounds: [0, {rows}) x [0, {cols})")
            }
            Self::EmptySpace => write!(f, "lattice must have at least one cell"),
        }
    }
}

impl std::error::Error for SpaceError {}
