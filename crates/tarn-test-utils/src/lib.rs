//! Test fixtures for Tarn development.
//!
//! Canonical heightmaps and energy grids with known answers, shared by the
//! unit, integration, and benchmark suites.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::*;

use tarn_core::DigitGrid;

/// Parse a fixture string into a digit grid, panicking on malformed input.
pub fn grid(text: &str) -> DigitGrid {
    match text.parse() {
        Ok(g) => g,
        Err(e) => panic!("malformed fixture: {e}"),
    }
}

/// Build a digit grid from nested rows, panicking on malformed input.
pub fn grid_from_rows(rows: Vec<Vec<u8>>) -> DigitGrid {
    match DigitGrid::from_rows(rows) {
        Ok(g) => g,
        Err(e) => panic!("malformed fixture: {e}"),
    }
}

/// A grid of `rows * cols` cells all holding `value`.
pub fn uniform(rows: usize, cols: usize, value: u8) -> DigitGrid {
    grid_from_rows(vec![vec![value; cols]; rows])
}
