//! Pareto frontier extraction.
//!
//! Given N scored points of D dimensions and a maximize/minimize flag per
//! dimension, returns the points that make up the Pareto frontier.
//!
//! # Key Types
//!
//! - [`FrontierConfig`]: Directions, scan mode, parallelism
//! - [`FrontierRunner`]: Executes the scan
//! - [`FrontierResult`]: Frontier points and their input indices
//! - [`FrontierError`]: Rejected input
//!
//! # Modes
//!
//! [`FrontierMode::AdjacentScan`] sorts on the first dimension and walks
//! the rows once, comparing each with the last accepted row.
//! [`FrontierMode::Exact`] checks every pair with [`dominance`].
//!
//! # References
//!
//! - Kung, Luccio & Preparata (1975), "On Finding the Maxima of a Set of Vectors"
//! - Deb et al. (2002), *A Fast and Elitist Multiobjective GA: NSGA-II*

mod config;
pub mod dominance;
mod error;
mod runner;
mod types;

pub use config::FrontierConfig;
pub use error::{FrontierError, Result};
pub use runner::{compute_frontier, FrontierRunner};
pub use types::{Direction, FrontierMode, FrontierResult};
