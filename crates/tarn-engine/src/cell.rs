//! Per-cell cascade state.

/// Where a cell stands within the current step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellPhase {
    /// Accumulating energy, at or below the flash threshold.
    Idle,
    /// Above the threshold and not yet flashed; flashes on the next scan.
    Primed,
    /// Flashed this step. Energy is frozen at 0 until the step ends.
    Flashed,
}

/// Energy level plus the per-step flashed flag.
///
/// The flag is only ever set during a step; between steps every cell
/// reads as unflashed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnergyCell {
    /// Current energy.
    pub energy: u32,
    /// Whether the cell has flashed during the step in progress.
    pub flashed: bool,
}

impl EnergyCell {
    /// An unflashed cell holding `energy`.
    pub const fn new(energy: u32) -> Self {
        Self {
            energy,
            flashed: false,
        }
    }

    /// Classify the cell against `threshold`.
    pub fn phase(&self, threshold: u32) -> CellPhase {
        if self.flashed {
            CellPhase::Flashed
        } else if self.energy > threshold {
            CellPhase::Primed
        } else {
            CellPhase::Idle
        }
    }

    /// Add one unit of energy unless the cell has already flashed.
    pub(crate) fn charge(&mut self) {
        if !self.flashed {
            self.energy = self.energy.saturating_add(1);
        }
    }

    /// Flash if primed. Returns whether a flash happened.
    pub(crate) fn try_flash(&mut self, threshold: u32) -> bool {
        if self.phase(threshold) != CellPhase::Primed {
            return false;
        }
        self.energy = 0;
        self.flashed = true;
        true
    }
}

impl From<u8> for EnergyCell {
    fn from(energy: u8) -> Self {
        Self::new(u32::from(energy))
    }
}
