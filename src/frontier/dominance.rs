//! Pareto dominance comparisons.
//!
//! All functions here except [`dominates`] treat larger values as better
//! in every dimension. Callers orient their data first by multiplying each
//! dimension with [`Direction::sign`](super::Direction::sign).

use super::types::Direction;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Dominance comparison result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    /// Left dominates right.
    Left,
    /// Right dominates left.
    Right,
    /// Neither dominates the other.
    Neither,
}

/// Compares two "larger is better" vectors for Pareto dominance.
///
/// Identical vectors do not dominate each other.
///
/// # Example
///
/// ```
/// use u_pareto::frontier::dominance::{dominance_cmp, Dominance};
///
/// assert_eq!(dominance_cmp(&[3.0, 3.0], &[2.0, 3.0]), Dominance::Left);
/// assert_eq!(dominance_cmp(&[1.0, 5.0], &[5.0, 1.0]), Dominance::Neither);
/// ```
pub fn dominance_cmp(a: &[f64], b: &[f64]) -> Dominance {
    let mut a_better_in_some = false;
    let mut b_better_in_some = false;

    for (&va, &vb) in a.iter().zip(b.iter()) {
        if va > vb {
            a_better_in_some = true;
        } else if vb > va {
            b_better_in_some = true;
        }
    }

    match (a_better_in_some, b_better_in_some) {
        (true, false) => Dominance::Left,
        (false, true) => Dominance::Right,
        _ => Dominance::Neither,
    }
}

/// Returns `true` if `a` dominates `b` under the given directions.
///
/// `a`, `b` and `directions` must have the same length.
pub fn dominates(a: &[f64], b: &[f64], directions: &[Direction]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), directions.len());

    let mut strictly_better = false;
    for ((&va, &vb), dir) in a.iter().zip(b.iter()).zip(directions.iter()) {
        let (va, vb) = (va * dir.sign(), vb * dir.sign());
        if va < vb {
            return false;
        }
        if va > vb {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Brute-force pairwise oracle over "larger is better" rows.
///
/// `mask[i]` is `true` when no other row dominates row `i`.
///
/// # Complexity
///
/// O(m * n²) where m = number of dimensions, n = number of rows
pub fn non_dominated_mask(rows: &[Vec<f64>]) -> Vec<bool> {
    let n = rows.len();
    let mut dominated = vec![false; n];

    for i in 0..n {
        for j in (i + 1)..n {
            match dominance_cmp(&rows[i], &rows[j]) {
                Dominance::Left => dominated[j] = true,
                Dominance::Right => dominated[i] = true,
                Dominance::Neither => {}
            }
        }
    }

    dominated.into_iter().map(|d| !d).collect()
}

/// Parallel form of [`non_dominated_mask`]; one task per row.
#[cfg(feature = "parallel")]
pub fn non_dominated_mask_par(rows: &[Vec<f64>]) -> Vec<bool> {
    rows.par_iter()
        .map(|row| {
            !rows
                .iter()
                .any(|other| dominance_cmp(other, row) == Dominance::Left)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cmp_clear_dominance() {
        assert_eq!(dominance_cmp(&[2.0, 2.0], &[1.0, 1.0]), Dominance::Left);
        assert_eq!(dominance_cmp(&[1.0, 1.0], &[2.0, 2.0]), Dominance::Right);
    }

    #[test]
    fn test_cmp_weak_dominance_counts() {
        // better in one, tied in the other
        assert_eq!(dominance_cmp(&[2.0, 1.0], &[1.0, 1.0]), Dominance::Left);
    }

    #[test]
    fn test_cmp_equal_is_neither() {
        assert_eq!(dominance_cmp(&[1.0, 1.0], &[1.0, 1.0]), Dominance::Neither);
    }

    #[test]
    fn test_dominates_respects_directions() {
        let dirs = [Direction::Minimize, Direction::Maximize];
        assert!(dominates(&[1.0, 5.0], &[2.0, 4.0], &dirs));
        assert!(!dominates(&[2.0, 4.0], &[1.0, 5.0], &dirs));

        let maximize = [Direction::Maximize; 2];
        assert!(!dominates(&[1.0, 5.0], &[2.0, 4.0], &maximize));
        assert!(!dominates(&[3.0, 3.0], &[3.0, 3.0], &maximize));
    }

    #[test]
    fn test_mask_mixed() {
        let rows = vec![
            vec![5.0, 1.0],
            vec![3.0, 3.0],
            vec![1.0, 5.0],
            vec![2.0, 2.0], // dominated by [3, 3]
            vec![3.0, 3.0], // duplicate, not dominated
        ];
        assert_eq!(
            non_dominated_mask(&rows),
            vec![true, true, true, false, true]
        );
    }

    #[test]
    fn test_mask_three_dimensions() {
        let rows = vec![
            vec![2.0, 0.0, 0.0],
            vec![1.0, 1.0, 0.0],
            vec![0.0, 0.0, 5.0],
            vec![0.0, 0.0, 4.0], // dominated by [0, 0, 5]
        ];
        assert_eq!(non_dominated_mask(&rows), vec![true, true, true, false]);
    }

    #[test]
    fn test_mask_empty_and_single() {
        assert!(non_dominated_mask(&[]).is_empty());
        assert_eq!(non_dominated_mask(&[vec![1.0]]), vec![true]);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_mask_matches_sequential() {
        let rows: Vec<Vec<f64>> = (0..40)
            .map(|i| {
                let x = i as f64;
                vec![x % 7.0, (x * 3.0) % 11.0, (40.0 - x) % 5.0]
            })
            .collect();
        assert_eq!(non_dominated_mask_par(&rows), non_dominated_mask(&rows));
    }
}
