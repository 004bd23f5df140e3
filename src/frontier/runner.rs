//! Frontier scan.

use std::cmp::Ordering;

use tracing::{debug, trace};

use super::config::FrontierConfig;
use super::dominance::non_dominated_mask;
use super::error::{FrontierError, Result};
use super::types::{Direction, FrontierMode, FrontierResult};

/// Executes frontier computations.
pub struct FrontierRunner;

impl FrontierRunner {
    /// Computes the frontier of `points` under `config`.
    ///
    /// # Algorithm
    ///
    /// 1. Flip the direction of dimension 0
    /// 2. Multiply a working copy of every point by the resulting signs, so
    ///    larger is better in dimensions `1..D` and dimension 0 is ordered
    ///    best-first when sorted ascending
    /// 3. Stable-sort the working copy ascending on dimension 0
    /// 4. Select rows according to [`FrontierMode`]
    /// 5. Multiply selected rows by the same signs to restore original units
    ///
    /// The input is only borrowed and never modified. An empty input yields
    /// an empty result.
    ///
    /// # Errors
    ///
    /// - [`FrontierError::ZeroDimensions`] if the first point is empty
    /// - [`FrontierError::DimensionMismatch`] /
    ///   [`FrontierError::InvalidDirectionValue`] for bad directions
    /// - [`FrontierError::RaggedPoints`] if point lengths differ
    /// - [`FrontierError::NotANumber`] if any score is NaN
    pub fn run(points: &[Vec<f64>], config: &FrontierConfig) -> Result<FrontierResult> {
        let Some(first) = points.first() else {
            debug!("empty point set, frontier is empty");
            return Ok(FrontierResult {
                points: Vec::new(),
                indices: Vec::new(),
            });
        };

        let dims = first.len();
        config.validate(dims)?;
        let directions = config.resolve_directions(dims)?;
        check_points(points, dims)?;

        debug!(
            points = points.len(),
            dims,
            mode = ?config.mode,
            "computing pareto frontier"
        );

        let mut scan_directions = directions.clone();
        scan_directions[0] = scan_directions[0].flipped();
        let signs: Vec<f64> = scan_directions.iter().map(|d| d.sign()).collect();

        let working: Vec<Vec<f64>> = points.iter().map(|p| apply_signs(p, &signs)).collect();

        let mut order: Vec<usize> = (0..working.len()).collect();
        order.sort_by(|&a, &b| {
            working[a][0]
                .partial_cmp(&working[b][0])
                .unwrap_or(Ordering::Equal)
        });

        let indices = match config.mode {
            FrontierMode::AdjacentScan => adjacent_scan(&working, &order),
            FrontierMode::Exact => exact_scan(points, &directions, &order, config.parallel),
        };

        let frontier: Vec<Vec<f64>> = indices
            .iter()
            .map(|&i| apply_signs(&working[i], &signs))
            .collect();

        debug!(frontier = frontier.len(), "pareto frontier computed");

        Ok(FrontierResult {
            points: frontier,
            indices,
        })
    }
}

/// Computes the Pareto frontier of `points`.
///
/// `directions` holds one `+1` (maximize) or `-1` (minimize) flag per
/// dimension; `None` maximizes every dimension. Uses
/// [`FrontierMode::AdjacentScan`]; see [`FrontierRunner::run`] for the
/// other modes and for row indices.
///
/// # Example
///
/// ```
/// use u_pareto::frontier::compute_frontier;
///
/// let points = vec![vec![1.0, 1.0], vec![2.0, 2.0], vec![3.0, 3.0]];
/// let frontier = compute_frontier(&points, None).unwrap();
/// assert_eq!(frontier, vec![vec![3.0, 3.0]]);
///
/// let points = vec![vec![1.0, 5.0], vec![3.0, 3.0], vec![5.0, 1.0]];
/// let frontier = compute_frontier(&points, Some(&[-1, 1])).unwrap();
/// assert_eq!(frontier, vec![vec![1.0, 5.0]]);
/// ```
pub fn compute_frontier(points: &[Vec<f64>], directions: Option<&[i32]>) -> Result<Vec<Vec<f64>>> {
    let config = FrontierConfig {
        directions: directions.map(<[i32]>::to_vec),
        ..FrontierConfig::default()
    };
    FrontierRunner::run(points, &config).map(FrontierResult::into_points)
}

fn check_points(points: &[Vec<f64>], dims: usize) -> Result<()> {
    for (row, point) in points.iter().enumerate() {
        if point.len() != dims {
            return Err(FrontierError::RaggedPoints {
                row,
                expected: dims,
                found: point.len(),
            });
        }
        if let Some(column) = point.iter().position(|v| v.is_nan()) {
            return Err(FrontierError::NotANumber { row, column });
        }
    }
    Ok(())
}

fn apply_signs(point: &[f64], signs: &[f64]) -> Vec<f64> {
    point.iter().zip(signs).map(|(v, s)| v * s).collect()
}

/// One forward pass, comparing each row with the last accepted row.
///
/// With a single dimension there is nothing beyond the sort key to compare,
/// so the frontier is the run of rows tied with the best.
fn adjacent_scan(working: &[Vec<f64>], order: &[usize]) -> Vec<usize> {
    let mut rows = order.iter().copied();
    let Some(first) = rows.next() else {
        return Vec::new();
    };

    if working[first].len() == 1 {
        let best = working[first][0];
        return order
            .iter()
            .copied()
            .take_while(|&i| working[i][0] == best)
            .collect();
    }

    let mut accepted = vec![first];
    let mut tail = first;
    for row in rows {
        let keeps_up = working[row]
            .iter()
            .zip(&working[tail])
            .all(|(candidate, last)| candidate >= last);
        if keeps_up {
            accepted.push(row);
            tail = row;
        } else {
            trace!(row, tail, "row falls behind frontier tail");
        }
    }
    accepted
}

/// Full pairwise check under the caller's directions, emitted in scan order.
fn exact_scan(
    points: &[Vec<f64>],
    directions: &[Direction],
    order: &[usize],
    parallel: bool,
) -> Vec<usize> {
    let signs: Vec<f64> = directions.iter().map(|d| d.sign()).collect();
    let oriented: Vec<Vec<f64>> = points.iter().map(|p| apply_signs(p, &signs)).collect();

    let mask = non_dominated(&oriented, parallel);
    order.iter().copied().filter(|&i| mask[i]).collect()
}

#[cfg(feature = "parallel")]
fn non_dominated(oriented: &[Vec<f64>], parallel: bool) -> Vec<bool> {
    if parallel {
        super::dominance::non_dominated_mask_par(oriented)
    } else {
        non_dominated_mask(oriented)
    }
}

#[cfg(not(feature = "parallel"))]
fn non_dominated(oriented: &[Vec<f64>], _parallel: bool) -> Vec<bool> {
    non_dominated_mask(oriented)
}
