//! Single-step cascade simulation.
//!
//! # Step semantics
//!
//! One step runs three phases over the whole grid:
//!
//! 1. **Charge**: every cell gains one unit of energy before any flash
//!    logic runs.
//! 2. **Cascade**: the grid is scanned in row-major order. A primed cell
//!    (energy above the threshold, not yet flashed) flashes: its energy
//!    drops to 0, it is marked flashed, and each unflashed Full-adjacency
//!    neighbour gains one unit. Scans repeat until one finds no primed
//!    cell, so chain reactions settle within the step.
//! 3. **Reset**: every flashed flag is cleared. Flashed cells keep energy 0.
//!
//! A flashed cell never gains energy for the rest of its step, so no cell
//! flashes twice per step and the per-step flash count never exceeds the
//! cell count.

use std::time::Instant;

use tarn_core::{Coord, DigitGrid, Grid};
use tarn_space::{Adjacency, Lattice};

use crate::cell::EnergyCell;
use crate::config::{CascadeConfig, ConfigError};
use crate::metrics::StepMetrics;

/// Owns an energy grid and advances it one step at a time.
///
/// The simulator takes exclusive ownership of its grid for the whole run;
/// [`into_grid`](CascadeSimulator::into_grid) hands it back.
///
/// # Examples
///
/// ```
/// use tarn_core::DigitGrid;
/// use tarn_engine::CascadeSimulator;
///
/// let heights: DigitGrid = "11111\n19991\n19191\n19991\n11111\n".parse().unwrap();
/// let mut sim = CascadeSimulator::new(&heights);
/// assert_eq!(sim.step(), 9);
/// assert_eq!(sim.step(), 0);
/// assert_eq!(sim.total_flashes(), 9);
/// ```
#[derive(Clone, Debug)]
pub struct CascadeSimulator {
    cells: Grid<EnergyCell>,
    lattice: Lattice,
    config: CascadeConfig,
    step_count: u64,
    total_flashes: u64,
}

impl CascadeSimulator {
    /// Start a simulation from digit energies with the default threshold.
    pub fn new(energies: &DigitGrid) -> Self {
        Self::build(energies.map(|&e| EnergyCell::from(e)), CascadeConfig::default())
    }

    /// Start a simulation from digit energies with a custom configuration.
    pub fn with_config(energies: &DigitGrid, config: CascadeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(energies.map(|&e| EnergyCell::from(e)), config))
    }

    /// Start a simulation from existing cell state.
    ///
    /// Any flashed flags left set in `cells` are cleared first, since a
    /// step always begins with every cell unflashed.
    pub fn from_cells(
        mut cells: Grid<EnergyCell>,
        config: CascadeConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        for cell in cells.iter_mut() {
            cell.flashed = false;
        }
        Ok(Self::build(cells, config))
    }

    fn build(cells: Grid<EnergyCell>, config: CascadeConfig) -> Self {
        Self {
            lattice: Lattice::of(&cells),
            cells,
            config,
            step_count: 0,
            total_flashes: 0,
        }
    }

    /// Advance one step and return how many cells flashed during it.
    pub fn step(&mut self) -> usize {
        self.step_with_metrics().flashes
    }

    /// Advance one step and return its full metrics.
    pub fn step_with_metrics(&mut self) -> StepMetrics {
        self.advance(|_| {})
    }

    /// One step, reporting each flash to `on_flash` as it happens.
    fn advance(&mut self, mut on_flash: impl FnMut(Coord)) -> StepMetrics {
        let start = Instant::now();
        let threshold = self.config.flash_threshold;

        // Phase 1: charge.
        for cell in self.cells.iter_mut() {
            cell.charge();
        }

        // Phase 2: cascade until a scan finds nothing primed.
        let mut flashes = 0usize;
        let mut scan_passes = 0u32;
        loop {
            scan_passes += 1;
            let mut new_flashes = 0usize;
            for coord in self.cells.coords() {
                if !self.cells[coord].try_flash(threshold) {
                    continue;
                }
                new_flashes += 1;
                on_flash(coord);
                for nb in self.lattice.neighbours(coord, Adjacency::Full) {
                    self.cells[nb].charge();
                }
            }
            flashes += new_flashes;
            if new_flashes == 0 {
                break;
            }
        }
        debug_assert!(flashes <= self.cells.cell_count());

        // Phase 3: reset flags.
        for cell in self.cells.iter_mut() {
            cell.flashed = false;
        }

        self.step_count += 1;
        self.total_flashes += flashes as u64;
        let metrics = StepMetrics {
            step: self.step_count,
            flashes,
            scan_passes,
            total_us: start.elapsed().as_micros() as u64,
        };
        log::trace!(
            "step {}: {} flashes in {} scans",
            metrics.step,
            metrics.flashes,
            metrics.scan_passes
        );
        metrics
    }

    /// Number of steps taken so far.
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Flashes summed over every step taken so far.
    pub fn total_flashes(&self) -> u64 {
        self.total_flashes
    }

    /// Number of cells in the grid.
    pub fn cell_count(&self) -> usize {
        self.cells.cell_count()
    }

    /// The configuration in use.
    pub fn config(&self) -> &CascadeConfig {
        &self.config
    }

    /// Current cell state. Between steps every flag reads `false`.
    pub fn cells(&self) -> &Grid<EnergyCell> {
        &self.cells
    }

    /// Current energy of every cell.
    pub fn energies(&self) -> Grid<u32> {
        self.cells.map(|c| c.energy)
    }

    /// Stop the simulation and take back the grid.
    pub fn into_grid(self) -> Grid<EnergyCell> {
        self.cells
    }
}
