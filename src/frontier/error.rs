//! Error type for frontier computation.

use thiserror::Error;

/// Reasons a frontier computation is rejected.
///
/// Every variant aborts the call; no partial frontier is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrontierError {
    /// The direction vector length does not match the point dimensionality.
    #[error("direction vector has {found} entries but points have {expected} dimensions")]
    DimensionMismatch { expected: usize, found: usize },

    /// A direction flag other than `+1` or `-1`.
    #[error("direction flag at index {index} must be +1 or -1, got {value}")]
    InvalidDirectionValue { index: usize, value: i32 },

    /// The first point has no scores.
    #[error("points must have at least one dimension")]
    ZeroDimensions,

    /// A point whose length differs from the first point's.
    #[error("point {row} has {found} dimensions, expected {expected}")]
    RaggedPoints {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A NaN score, which has no position in the ordering.
    #[error("point {row} has a NaN score in dimension {column}")]
    NotANumber { row: usize, column: usize },
}

/// Result alias for frontier operations.
pub type Result<T> = std::result::Result<T, FrontierError>;
