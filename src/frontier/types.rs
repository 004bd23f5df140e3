//! Direction flags, scan modes, and the frontier result.

use super::error::{FrontierError, Result};

/// Preference direction for one dimension.
///
/// The raw flag form is `+1` for [`Maximize`](Direction::Maximize) and
/// `-1` for [`Minimize`](Direction::Minimize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Larger values are better.
    #[default]
    Maximize,
    /// Smaller values are better.
    Minimize,
}

impl Direction {
    /// Multiplier that turns this dimension into "larger is better".
    pub fn sign(self) -> f64 {
        match self {
            Direction::Maximize => 1.0,
            Direction::Minimize => -1.0,
        }
    }

    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Maximize => Direction::Minimize,
            Direction::Minimize => Direction::Maximize,
        }
    }

    /// The raw `+1` / `-1` flag.
    pub fn as_flag(self) -> i32 {
        match self {
            Direction::Maximize => 1,
            Direction::Minimize => -1,
        }
    }

    /// Parses a whole vector of raw flags.
    ///
    /// Reports the first entry that is not `+1` or `-1`.
    ///
    /// # Example
    ///
    /// ```
    /// use u_pareto::frontier::Direction;
    ///
    /// let dirs = Direction::parse_signs(&[1, -1]).unwrap();
    /// assert_eq!(dirs, vec![Direction::Maximize, Direction::Minimize]);
    /// assert!(Direction::parse_signs(&[1, 0]).is_err());
    /// ```
    pub fn parse_signs(flags: &[i32]) -> Result<Vec<Direction>> {
        flags
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                Direction::try_from(value)
                    .map_err(|_| FrontierError::InvalidDirectionValue { index, value })
            })
            .collect()
    }
}

impl TryFrom<i32> for Direction {
    type Error = FrontierError;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            1 => Ok(Direction::Maximize),
            -1 => Ok(Direction::Minimize),
            _ => Err(FrontierError::InvalidDirectionValue { index: 0, value }),
        }
    }
}

/// How candidate rows are tested for membership in the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FrontierMode {
    /// One forward pass; each row is compared only with the most recently
    /// accepted row.
    ///
    /// O(n log n). Matches exact dominance for two dimensions without ties,
    /// but may drop non-dominated rows when D > 2 and may keep rows that
    /// tie the chain tail in dimensions `1..D`.
    #[default]
    AdjacentScan,

    /// Every row is checked against every other row; a row is kept unless
    /// some other row dominates it.
    ///
    /// O(m * n²).
    Exact,
}

/// Output of a frontier computation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrontierResult {
    /// Frontier points in original units, in scan order.
    pub points: Vec<Vec<f64>>,

    /// Input row index of each entry in `points`.
    pub indices: Vec<usize>,
}

impl FrontierResult {
    /// Number of frontier points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` when the frontier has no points.
    ///
    /// Only happens for an empty input.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consumes the result, keeping only the points.
    pub fn into_points(self) -> Vec<Vec<f64>> {
        self.points
    }
}
