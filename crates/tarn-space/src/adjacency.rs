//! Neighbourhood rules for square lattices.

/// Offsets for the four cardinal directions: N, S, W, E.
const OFFSETS_4: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// All eight offsets: N, S, W, E, NW, NE, SW, SE.
const OFFSETS_8: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Which cells count as neighbours of a cell.
///
/// A single traversal always uses one rule; basin discovery uses
/// [`Orthogonal`](Adjacency::Orthogonal), cascade splashes use
/// [`Full`](Adjacency::Full).
///
/// # Examples
///
/// ```
/// use tarn_core::Coord;
/// use tarn_space::{Adjacency, Lattice};
///
/// let lattice = Lattice::new(3, 3).unwrap();
/// let centre = Coord::new(1, 1);
/// assert_eq!(lattice.neighbours(centre, Adjacency::Orthogonal).len(), 4);
/// assert_eq!(lattice.neighbours(centre, Adjacency::Full).len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Adjacency {
    /// 4-connected: north, south, west, east.
    Orthogonal,
    /// 8-connected: the orthogonal neighbours plus the four diagonals.
    Full,
}

impl Adjacency {
    /// `(d_row, d_col)` offsets in the order neighbours are reported.
    pub fn offsets(self) -> &'static [(isize, isize)] {
        match self {
            Self::Orthogonal => &OFFSETS_4,
            Self::Full => &OFFSETS_8,
        }
    }

    /// Number of neighbours an interior cell has under this rule.
    pub fn degree(self) -> usize {
        self.offsets().len()
    }
}
