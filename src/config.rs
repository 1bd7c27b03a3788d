//! Engine configuration and façade.
//!
//! [`EngineConfig`] gathers every tunable of the engine and deserializes
//! from any serde format with defaults for omitted fields. [`Engine`] binds a
//! configuration to the three entry points plus slack analysis.
//!
//! # Usage
//!
//! ```
//! use chrono::NaiveDate;
//! use u_risk_schedule::{Engine, EngineConfig};
//! use u_risk_schedule::models::{Dependency, Project, Task, ThreePointEstimate};
//!
//! let mut config = EngineConfig::default();
//! config.monte_carlo = config.monte_carlo.with_trials(200).with_seed(42);
//! let engine = Engine::new(config).unwrap();
//!
//! let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let project = Project::new(start)
//!     .with_task(Task::new(0, ThreePointEstimate::new(2.0, 3.0, 4.0)))
//!     .with_task(Task::new(1, ThreePointEstimate::new(4.0, 5.0, 6.0)))
//!     .with_dependency(Dependency::finish_to_start(0, 1));
//!
//! let analysis = engine.analyze(&project).unwrap();
//! assert_eq!(analysis.critical_path, vec![0, 1]);
//!
//! let samples = engine.run_monte_carlo(&project).unwrap();
//! assert_eq!(samples.len(), 200);
//! ```

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;

use crate::cpm::{
    analyze, compute_backward_pass_with, compute_schedule_with, BackwardOrder, BackwardSchedule,
    CriticalPathAnalysis, ForwardSchedule,
};
use crate::error::{Result, ScheduleError};
use crate::estimation::SlowdownModel;
use crate::models::{Project, TaskId};
use crate::simulation::{run_monte_carlo_with, MonteCarloConfig};

/// Complete engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Human-factor slowdown constants.
    pub slowdown: SlowdownModel,
    /// Simulation settings.
    pub monte_carlo: MonteCarloConfig,
    /// Backward pass visiting order.
    pub backward_order: BackwardOrder,
}

impl EngineConfig {
    /// Sets the slowdown constants.
    pub fn with_slowdown(mut self, slowdown: SlowdownModel) -> Self {
        self.slowdown = slowdown;
        self
    }

    /// Sets the simulation settings.
    pub fn with_monte_carlo(mut self, monte_carlo: MonteCarloConfig) -> Self {
        self.monte_carlo = monte_carlo;
        self
    }

    /// Sets the backward pass order.
    pub fn with_backward_order(mut self, order: BackwardOrder) -> Self {
        self.backward_order = order;
        self
    }

    /// Checks the configuration for unusable values.
    pub fn validate(&self) -> Result<()> {
        self.slowdown.validate()
    }
}

/// Scheduling and simulation engine bound to a configuration.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Creates an engine.
    ///
    /// # Errors
    /// [`ScheduleError::InvalidConfig`] if the configuration is unusable.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Forward pass: early start/finish and expected durations.
    pub fn compute_schedule(&self, project: &Project) -> Result<ForwardSchedule> {
        compute_schedule_with(project, &self.config.slowdown)
    }

    /// Backward pass from forward pass output.
    pub fn compute_backward_pass(
        &self,
        project: &Project,
        early_finish: &BTreeMap<TaskId, NaiveDateTime>,
        task_duration: &BTreeMap<TaskId, f64>,
    ) -> Result<BackwardSchedule> {
        compute_backward_pass_with(project, early_finish, task_duration, self.config.backward_order)
    }

    /// Forward and backward pass with slack and critical path.
    pub fn analyze(&self, project: &Project) -> Result<CriticalPathAnalysis> {
        analyze(project, &self.config.slowdown, self.config.backward_order)
    }

    /// Monte Carlo simulation with the configured trial count.
    pub fn run_monte_carlo(&self, project: &Project) -> Result<Vec<f64>> {
        run_monte_carlo_with(project, &self.config.monte_carlo, &self.config.slowdown, None)
    }

    /// Monte Carlo simulation that stops starting new trials once `cancel`
    /// fires.
    pub fn run_monte_carlo_cancellable(
        &self,
        project: &Project,
        cancel: &CancellationToken,
    ) -> Result<Vec<f64>> {
        run_monte_carlo_with(
            project,
            &self.config.monte_carlo,
            &self.config.slowdown,
            Some(cancel),
        )
    }
}

impl TryFrom<EngineConfig> for Engine {
    type Error = ScheduleError;

    fn try_from(config: EngineConfig) -> Result<Self> {
        Self::new(config)
    }
}
