//! Core types for the Tarn grid engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the rectangular [`Grid`] storage, the hashable [`Coord`] key, the
//! range-checked [`DigitGrid`], and the [`GridError`] taxonomy for
//! malformed input.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod digits;
pub mod error;
pub mod grid;

pub use coord::Coord;
pub use digits::{DigitGrid, MAX_DIGIT};
pub use error::GridError;
pub use grid::Grid;
