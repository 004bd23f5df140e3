//! Pareto frontier computation for scored point sets.
//!
//! - **Frontier**: extracts the non-dominated points of an (N, D) batch
//!   with a per-dimension maximize/minimize direction, either with a
//!   one-pass sorted scan or an exact pairwise check.
//! - **Dominance**: pairwise Pareto comparison utilities.
//!
//! # Example
//!
//! ```
//! use u_pareto::frontier::compute_frontier;
//!
//! let points = vec![
//!     vec![1.0, 5.0],
//!     vec![2.0, 4.0],
//!     vec![3.0, 3.0],
//!     vec![4.0, 2.0],
//!     vec![5.0, 1.0],
//! ];
//! let frontier = compute_frontier(&points, Some(&[1, 1])).unwrap();
//! assert_eq!(frontier.len(), 5);
//! assert_eq!(frontier[0], vec![5.0, 1.0]);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for configs, directions, results
//! - `parallel`: rayon-backed exact mode

pub mod frontier;

pub use frontier::{compute_frontier, FrontierError};
