//! Lattice adjacency compliance test helpers.
//!
//! These functions verify the invariants every traversal in the workspace
//! relies on, for one lattice shape and one adjacency rule.

use crate::adjacency::Adjacency;
use crate::lattice::Lattice;
use indexmap::IndexSet;

/// Assert that no cell lists itself as a neighbour.
pub fn assert_no_self_loops(space: &Lattice, rule: Adjacency) {
    for coord in space.canonical_ordering() {
        assert!(
            !space.neighbours(coord, rule).contains(&coord),
            "{coord} listed as its own neighbour under {rule:?}"
        );
    }
}

/// Assert that every reported neighbour lies inside the lattice.
pub fn assert_neighbours_in_bounds(space: &Lattice, rule: Adjacency) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(coord, rule) {
            assert!(
                space.contains(nb),
                "neighbour {nb} of {coord} escapes {}x{} lattice",
                space.rows(),
                space.cols()
            );
        }
    }
}

/// Assert that neighbour lists have no duplicates.
pub fn assert_neighbours_unique(space: &Lattice, rule: Adjacency) {
    for coord in space.canonical_ordering() {
        let n = space.neighbours(coord, rule);
        let unique: IndexSet<_> = n.iter().collect();
        assert_eq!(unique.len(), n.len(), "duplicate neighbours of {coord}");
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(space: &Lattice, rule: Adjacency) {
    for coord in space.canonical_ordering() {
        for nb in space.neighbours(coord, rule) {
            assert!(
                space.neighbours(nb, rule).contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that the largest observed degree matches `max_neighbour_degree`.
pub fn assert_max_degree_exact(space: &Lattice, rule: Adjacency) {
    let observed = space
        .canonical_ordering()
        .into_iter()
        .map(|c| space.neighbours(c, rule).len())
        .max()
        .unwrap_or(0);
    assert_eq!(observed, space.max_neighbour_degree(rule));
}

/// Assert that `canonical_ordering` returns exactly `cell_count` unique,
/// sorted coords.
pub fn assert_canonical_ordering_complete(space: &Lattice) {
    let ordering = space.canonical_ordering();
    assert_eq!(ordering.len(), space.cell_count());
    let unique: IndexSet<_> = ordering.iter().collect();
    assert_eq!(
        unique.len(),
        space.cell_count(),
        "canonical_ordering has duplicates"
    );
    assert!(ordering.windows(2).all(|w| w[0] < w[1]));
}

/// Run all compliance checks on a lattice under one rule.
pub fn run_full_compliance(space: &Lattice, rule: Adjacency) {
    assert_no_self_loops(space, rule);
    assert_neighbours_in_bounds(space, rule);
    assert_neighbours_unique(space, rule);
    assert_neighbours_symmetric(space, rule);
    assert_max_degree_exact(space, rule);
    assert_canonical_ordering_complete(space);
}
