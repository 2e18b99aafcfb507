//! Per-step cascade metrics.
//!
//! [`StepMetrics`] captures what happened during a single step, for
//! logging, profiling, and tests that inspect chain-reaction depth.

/// Counters and timing collected during a single step.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// One-based index of the step these metrics describe.
    pub step: u64,
    /// Number of cells that flashed during the step.
    pub flashes: usize,
    /// Grid scans needed to settle the step, including the final scan
    /// that found nothing new.
    pub scan_passes: u32,
    /// Wall-clock time for the entire step, in microseconds.
    pub total_us: u64,
}

impl StepMetrics {
    /// Whether every one of `cell_count` cells flashed this step.
    pub fn is_synchronized(&self, cell_count: usize) -> bool {
        self.flashes == cell_count
    }
}
