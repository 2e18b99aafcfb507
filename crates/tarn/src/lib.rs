//! Tarn: bounded grid basin analysis and energy-cascade simulation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tarn sub-crates, plus the six one-call operations most callers need.
//!
//! # Quick start
//!
//! ```rust
//! use tarn::prelude::*;
//!
//! let heights: DigitGrid = "2199943210\n3987894921\n9856789892\n8767896789\n9899965678\n"
//!     .parse()
//!     .unwrap();
//! assert_eq!(tarn::risk_level(&heights), 15);
//! assert_eq!(tarn::top_three_basin_product(&heights), 1134);
//!
//! let energies: DigitGrid = "11111\n19991\n19191\n19991\n11111\n".parse().unwrap();
//! assert_eq!(tarn::run_fixed_steps(&energies, 2), 9);
//! assert!(matches!(
//!     tarn::find_synchronization_step(&energies, 3),
//!     Err(RunError::NotSynchronized { ceiling: 3, .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tarn-core` | `Grid`, `DigitGrid`, `Coord`, `GridError` |
//! | [`space`] | `tarn-space` | Adjacency rules and neighbour enumeration |
//! | [`basin`] | `tarn-basin` | Low points, basin flood fill, size ranking |
//! | [`engine`] | `tarn-engine` | Cascade simulator and convergence runner |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid storage, coordinates, and construction errors (`tarn-core`).
pub use tarn_core as types;

/// Adjacency rules and bounded neighbour enumeration (`tarn-space`).
pub use tarn_space as space;

/// Low-point location, basin extraction, and aggregation (`tarn-basin`).
pub use tarn_basin as basin;

/// Cascade simulation and multi-step runners (`tarn-engine`).
pub use tarn_engine as engine;

pub use tarn_basin::{basin_size, find_low_points, risk_level, top_three_basin_product};
pub use tarn_engine::{find_synchronization_step, run_fixed_steps};

/// Common imports for typical Tarn usage.
///
/// ```rust
/// use tarn::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tarn_core::{Coord, DigitGrid, Grid, GridError};

    // Space
    pub use tarn_space::{Adjacency, Lattice, SpaceError};

    // Basins
    pub use tarn_basin::{Basin, BasinExtractor};

    // Engine
    pub use tarn_engine::{
        CascadeConfig, CascadeSimulator, ConfigError, ConvergenceRunner, EnergyCell, RunError,
        StepMetrics,
    };
}
