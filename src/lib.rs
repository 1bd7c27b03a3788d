//! Project completion risk engine.
//!
//! Estimates when a project will finish under uncertainty: a deterministic
//! critical-path schedule plus a Monte Carlo distribution of completion
//! times, with task durations adjusted for assignee skill mismatch and
//! workload overload.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Employee`, `Dependency`, `Project`
//! - **`estimation`**: PERT durations scaled by the assignee slowdown model
//! - **`cpm`**: Dependency index, forward/backward pass, slack and critical path
//! - **`simulation`**: Triangular sampling, Monte Carlo runs, summary statistics
//! - **`validation`**: Input integrity checks (unknown IDs, DAG cycles, estimates)
//! - **`config`**: `EngineConfig` and the `Engine` façade
//!
//! # Entry Points
//!
//! | Operation | Function |
//! |-----------|----------|
//! | Forward pass | [`cpm::compute_schedule`] |
//! | Backward pass | [`cpm::compute_backward_pass`] |
//! | Simulation | [`simulation::run_monte_carlo`] |
//!
//! Fixture construction and chart/report rendering are left to callers.
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Malcolm et al. (1959), PERT
//! - Vose (2008), "Risk Analysis: A Quantitative Guide"

pub mod config;
pub mod cpm;
pub mod error;
pub mod estimation;
pub mod models;
pub mod simulation;
pub mod validation;

pub use config::{Engine, EngineConfig};
pub use error::{Result, ScheduleError};
