//! Frontier configuration.
//!
//! [`FrontierConfig`] holds the direction flags and scan parameters.

use super::error::{FrontierError, Result};
use super::types::{Direction, FrontierMode};

/// Configuration for a frontier computation.
///
/// Directions are stored as raw `+1` / `-1` flags so that malformed
/// input survives until [`validate`](FrontierConfig::validate) can report
/// it against the actual point dimensionality.
///
/// # Defaults
///
/// ```
/// use u_pareto::frontier::{FrontierConfig, FrontierMode};
///
/// let config = FrontierConfig::default();
/// assert!(config.directions.is_none());
/// assert_eq!(config.mode, FrontierMode::AdjacentScan);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_pareto::frontier::{Direction, FrontierConfig, FrontierMode};
///
/// let config = FrontierConfig::default()
///     .with_directions(&[Direction::Minimize, Direction::Maximize])
///     .with_mode(FrontierMode::Exact);
/// assert!(config.validate(2).is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontierConfig {
    /// Per-dimension direction flags (`+1` maximize, `-1` minimize).
    ///
    /// `None` maximizes every dimension.
    pub directions: Option<Vec<i32>>,

    /// Membership test used by the scan.
    pub mode: FrontierMode,

    /// Whether exact mode checks rows in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature or in adjacent mode.
    pub parallel: bool,
}

impl FrontierConfig {
    /// Sets typed directions.
    pub fn with_directions(mut self, directions: &[Direction]) -> Self {
        self.directions = Some(directions.iter().map(|d| d.as_flag()).collect());
        self
    }

    /// Sets raw `+1` / `-1` flags; checked by [`validate`](Self::validate).
    pub fn with_signs(mut self, flags: Vec<i32>) -> Self {
        self.directions = Some(flags);
        self
    }

    /// Sets the scan mode.
    pub fn with_mode(mut self, mode: FrontierMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enables or disables parallel exact-mode checks.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Resolves the directions for points of the given dimensionality.
    ///
    /// Length is checked before values. Without explicit directions a
    /// fresh all-maximize vector is returned.
    pub fn resolve_directions(&self, dimensions: usize) -> Result<Vec<Direction>> {
        match &self.directions {
            Some(flags) => {
                if flags.len() != dimensions {
                    return Err(FrontierError::DimensionMismatch {
                        expected: dimensions,
                        found: flags.len(),
                    });
                }
                Direction::parse_signs(flags)
            }
            None => Ok(vec![Direction::Maximize; dimensions]),
        }
    }

    /// Validates the configuration against a point dimensionality.
    pub fn validate(&self, dimensions: usize) -> Result<()> {
        if dimensions == 0 {
            return Err(FrontierError::ZeroDimensions);
        }
        self.resolve_directions(dimensions).map(|_| ())
    }
}
