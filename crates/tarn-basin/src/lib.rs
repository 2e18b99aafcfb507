//! Low-point location and basin extraction over height grids.
//!
//! Pipeline: [`low_points`] scans a [`DigitGrid`](tarn_core::DigitGrid) for cells
//! strictly lower than every orthogonal neighbour; each low point seeds a
//! [`BasinExtractor`] flood fill; [`aggregate`] ranks the resulting basin
//! sizes.
//!
//! The grid is borrowed immutably throughout, so any number of queries may
//! run against the same grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod aggregate;
pub mod basin;
pub mod low_points;

pub use aggregate::{basin_sizes, top_basin_sizes, top_three_basin_product, top_n_product};
pub use basin::{basin_size, Basin, BasinExtractor};
pub use low_points::{find_low_points, is_low_point, low_points, risk_level, LowPoints};
