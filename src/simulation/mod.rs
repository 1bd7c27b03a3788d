//! Stochastic risk simulation.
//!
//! Repeats the forward pass under randomized task durations to build a
//! distribution of project completion times.
//!
//! # Algorithm
//!
//! For each trial:
//! 1. Sample each task's duration from the triangular distribution of its
//!    three-point estimate.
//! 2. Multiply by the primary assignee's slowdown factor (not resampled).
//! 3. Run the forward pass and record whole days to the latest finish.
//!
//! # References
//!
//! - Van Slyke (1963), "Monte Carlo Methods and the PERT Problem"
//! - Vose (2008), "Risk Analysis: A Quantitative Guide", Ch. 10

mod monte_carlo;
mod summary;
mod triangular;

pub use monte_carlo::{run_monte_carlo, run_monte_carlo_with, MonteCarloConfig};
pub use summary::SimulationSummary;
pub use triangular::random_triangular;
