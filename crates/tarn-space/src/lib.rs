//! Grid adjacency for Tarn.
//!
//! This crate answers one question: which in-bounds cells neighbour a given
//! cell under a given [`Adjacency`] rule. Every traversal in the workspace
//! (low-point scans, basin flood fill, cascade splashes) goes through
//! [`Lattice::neighbours`] or the free function [`neighbours`].
//!
//! Out-of-bounds neighbours are omitted rather than wrapped or clamped,
//! so edge cells have fewer neighbours than interior ones.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod adjacency;
pub mod error;
pub mod lattice;

#[cfg(test)]
pub(crate) mod compliance;

pub use adjacency::Adjacency;
pub use error::SpaceError;
pub use lattice::{neighbours, Lattice, Neighbours};
