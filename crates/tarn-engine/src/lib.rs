//! Energy-cascade simulation for Tarn.
//!
//! [`CascadeSimulator`] owns a grid of [`EnergyCell`]s and advances it one
//! discrete step at a time, resolving every chain reaction inside the
//! step. [`ConvergenceRunner`] drives a simulator for a fixed number of
//! steps or until every cell flashes on the same step.
//!
//! Everything here is single-threaded and synchronous; a simulator is
//! stepped through `&mut self` and never shares its grid.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod config;
pub mod metrics;
pub mod runner;
pub mod simulator;

pub use cell::{CellPhase, EnergyCell};
pub use config::{CascadeConfig, ConfigError};
pub use metrics::StepMetrics;
pub use runner::{find_synchronization_step, run_fixed_steps, ConvergenceRunner, RunError};
pub use simulator::CascadeSimulator;
