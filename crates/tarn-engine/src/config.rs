//! Cascade configuration, validation, and error types.

use std::error::Error;
use std::fmt;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`CascadeConfig::validate()`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// The flash threshold leaves no headroom for in-step energy gain.
    ThresholdTooLarge {
        /// The configured threshold.
        configured: u32,
        /// Largest accepted threshold.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThresholdTooLarge { configured, max } => {
                write!(f, "flash_threshold {configured} exceeds maximum of {max}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── CascadeConfig ──────────────────────────────────────────────────

/// Parameters of the cascade rule.
///
/// A cell flashes once its energy is strictly greater than
/// `flash_threshold`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CascadeConfig {
    /// Energy a cell must exceed to flash. Default: 9.
    pub flash_threshold: u32,
}

impl CascadeConfig {
    /// Largest accepted threshold.
    ///
    /// Within one step a cell gains at most one unit from the global
    /// increment and one from each of its eight neighbours before it is
    /// scanned, so energies stay below `threshold + 10`.
    pub const MAX_FLASH_THRESHOLD: u32 = u32::MAX - 9;

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.flash_threshold > Self::MAX_FLASH_THRESHOLD {
            return Err(ConfigError::ThresholdTooLarge {
                configured: self.flash_threshold,
                max: Self::MAX_FLASH_THRESHOLD,
            });
        }
        Ok(())
    }
}

impl Default for CascadeConfig {
    fn default() -> Self {
        Self { flash_threshold: 9 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = CascadeConfig::default();
        assert_eq!(c.flash_threshold, 9);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_threshold_is_valid() {
        assert!(CascadeConfig { flash_threshold: 0 }.validate().is_ok());
    }

    #[test]
    fn threshold_without_headroom_rejected() {
        let c = CascadeConfig {
            flash_threshold: u32::MAX,
        };
        assert_eq!(
            c.validate(),
            Err(ConfigError::ThresholdTooLarge {
                configured: u32::MAX,
                max: CascadeConfig::MAX_FLASH_THRESHOLD,
            })
        );
        let edge = CascadeConfig {
            flash_threshold: CascadeConfig::MAX_FLASH_THRESHOLD,
        };
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn error_display() {
        let e = ConfigError::ThresholdTooLarge {
            configured: 7,
            max: 5,
        };
        assert_eq!(e.to_string(), "flash_threshold 7 exceeds maximum of 5");
    }
}
