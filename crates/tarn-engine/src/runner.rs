//! Multi-step drivers: bounded runs and synchronization search.

use std::fmt;

use tarn_core::DigitGrid;

use crate::simulator::CascadeSimulator;

// ── RunError ────────────────────────────────────────────────────

/// Errors from [`ConvergenceRunner::run_until_synchronized`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunError {
    /// The search was given a ceiling of zero steps.
    ZeroCeiling,
    /// No step within the ceiling flashed every cell.
    NotSynchronized {
        /// Number of steps that were run.
        ceiling: u64,
        /// Flash count of the last step run.
        last_step_flashes: usize,
    },
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCeiling => write!(f, "synchronization ceiling must be at least 1"),
            Self::NotSynchronized {
                ceiling,
                last_step_flashes,
            } => write!(
                f,
                "no synchronized step within {ceiling} steps \
                 (last step flashed {last_step_flashes} cells)"
            ),
        }
    }
}

impl std::error::Error for RunError {}

// ── ConvergenceRunner ───────────────────────────────────────────

/// Drives a [`CascadeSimulator`] over many steps.
///
/// Step indices reported by the runner are absolute: they count from the
/// simulator's first step, including any steps taken before the runner
/// was created.
#[derive(Clone, Debug)]
pub struct ConvergenceRunner {
    simulator: CascadeSimulator,
}

impl ConvergenceRunner {
    /// Wrap a simulator.
    pub fn new(simulator: CascadeSimulator) -> Self {
        Self { simulator }
    }

    /// Run exactly `steps` steps and return the flashes they produced.
    pub fn run_fixed(&mut self, steps: u64) -> u64 {
        let mut flashes = 0u64;
        for _ in 0..steps {
            flashes += self.simulator.step() as u64;
        }
        log::debug!(
            "ran {steps} steps to step {}: {flashes} flashes",
            self.simulator.step_count()
        );
        flashes
    }

    /// Step until every cell flashes on the same step, running at most
    /// `ceiling` steps.
    ///
    /// Returns the absolute index of the synchronized step. The ceiling
    /// bounds the work of a single call; pass the largest latency the
    /// caller can afford.
    ///
    /// # Errors
    ///
    /// [`RunError::ZeroCeiling`] if `ceiling` is 0, and
    /// [`RunError::NotSynchronized`] if no step within the ceiling
    /// flashed every cell. The simulator keeps the state reached either
    /// way.
    pub fn run_until_synchronized(&mut self, ceiling: u64) -> Result<u64, RunError> {
        if ceiling == 0 {
            return Err(RunError::ZeroCeiling);
        }
        let cell_count = self.simulator.cell_count();
        let mut last_step_flashes = 0;
        for _ in 0..ceiling {
            let metrics = self.simulator.step_with_metrics();
            if metrics.is_synchronized(cell_count) {
                log::debug!("synchronized on step {}", metrics.step);
                return Ok(metrics.step);
            }
            last_step_flashes = metrics.flashes;
        }
        log::debug!("no synchronization within {ceiling} steps");
        Err(RunError::NotSynchronized {
            ceiling,
            last_step_flashes,
        })
    }

    /// The driven simulator.
    pub fn simulator(&self) -> &CascadeSimulator {
        &self.simulator
    }

    /// Stop driving and take back the simulator.
    pub fn into_simulator(self) -> CascadeSimulator {
        self.simulator
    }
}

impl From<CascadeSimulator> for ConvergenceRunner {
    fn from(simulator: CascadeSimulator) -> Self {
        Self::new(simulator)
    }
}

/// Total flashes over `steps` steps starting from `energies`.
///
/// Runs on a fresh copy; `energies` is not modified.
pub fn run_fixed_steps(energies: &DigitGrid, steps: u64) -> u64 {
    ConvergenceRunner::new(CascadeSimulator::new(energies)).run_fixed(steps)
}

/// First step on which every cell flashes, searching at most `ceiling`
/// steps from `energies`.
///
/// Runs on a fresh copy; `energies` is not modified.
///
/// # Errors
///
/// See [`ConvergenceRunner::run_until_synchronized`].
pub fn find_synchronization_step(energies: &DigitGrid, ceiling: u64) -> Result<u64, RunError> {
    ConvergenceRunner::new(CascadeSimulator::new(energies)).run_until_synchronized(ceiling)
}
