//! Monte Carlo simulation of project duration.
//!
//! Each trial samples every task's duration from its triangular estimate,
//! applies the primary assignee's static slowdown, reruns the forward pass
//! and records the whole-day project duration.
//!
//! # Reproducibility
//!
//! Trial `i` owns a `SmallRng` seeded with `base_seed + i`. The output is
//! therefore identical for a fixed seed whether trials run sequentially or
//! on the rayon pool.

use chrono::NaiveDateTime;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use super::random_triangular;
use crate::cpm::{propagate, DependencyIndex};
use crate::error::Result;
use crate::estimation::SlowdownModel;
use crate::models::{Project, TaskId};

/// Monte Carlo run settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonteCarloConfig {
    /// Number of trials.
    pub trials: usize,
    /// Base seed. `None` draws one from the thread RNG.
    pub seed: Option<u64>,
    /// Distribute trials over the rayon thread pool.
    pub parallel: bool,
}

impl Default for MonteCarloConfig {
    fn default() -> Self {
        Self {
            trials: 1000,
            seed: None,
            parallel: false,
        }
    }
}

impl MonteCarloConfig {
    /// Sets the trial count.
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Fixes the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel trials.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Sampling parameters of one task, fixed for the whole run.
#[derive(Debug, Clone, Copy)]
struct TaskSampler {
    id: TaskId,
    low: f64,
    mode: f64,
    high: f64,
    slowdown: f64,
}

/// Runs `trials` unseeded sequential trials with default slowdown constants.
///
/// Returns one whole-day project duration per trial; empty for a project
/// with no tasks.
pub fn run_monte_carlo(project: &Project, trials: usize) -> Result<Vec<f64>> {
    run_monte_carlo_with(
        project,
        &MonteCarloConfig::default().with_trials(trials),
        &SlowdownModel::default(),
        None,
    )
}

/// Runs a configured simulation.
///
/// `cancel` is checked before each trial starts; a cancelled run returns the
/// durations of the trials that completed.
///
/// # Errors
/// Graph errors ([`UnknownTask`](crate::ScheduleError::UnknownTask),
/// [`CyclicDependency`](crate::ScheduleError::CyclicDependency)) are raised
/// before the first trial.
pub fn run_monte_carlo_with(
    project: &Project,
    config: &MonteCarloConfig,
    model: &SlowdownModel,
    cancel: Option<&CancellationToken>,
) -> Result<Vec<f64>> {
    if project.is_empty() || config.trials == 0 {
        return Ok(Vec::new());
    }

    let index = DependencyIndex::new(project)?;
    let order = index.topological_order()?;
    let samplers: Vec<TaskSampler> = project
        .tasks
        .values()
        .map(|task| TaskSampler {
            id: task.id,
            low: task.estimate.optimistic,
            mode: task.estimate.most_likely,
            high: task.estimate.pessimistic,
            slowdown: model.assignee_slowdown(task, project).unwrap_or(1.0),
        })
        .collect();

    let base_seed = config.seed.unwrap_or_else(|| rand::rng().random());
    info!(
        trials = config.trials,
        base_seed,
        parallel = config.parallel,
        tasks = samplers.len(),
        "starting monte carlo simulation"
    );

    let run_trial = |trial: usize| -> Option<Result<f64>> {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return None;
        }
        let seed = base_seed.wrapping_add(trial as u64);
        Some(simulate_trial(project.start_date, &index, &order, &samplers, seed))
    };

    let outcomes: Vec<Option<Result<f64>>> = if config.parallel {
        (0..config.trials).into_par_iter().map(run_trial).collect()
    } else {
        (0..config.trials).map(run_trial).collect()
    };

    let durations = outcomes.into_iter().flatten().collect::<Result<Vec<f64>>>()?;
    if durations.len() < config.trials {
        warn!(
            completed = durations.len(),
            requested = config.trials,
            "monte carlo simulation cancelled"
        );
    } else {
        info!(completed = durations.len(), "monte carlo simulation finished");
    }
    Ok(durations)
}

fn simulate_trial(
    start: NaiveDateTime,
    index: &DependencyIndex,
    order: &[TaskId],
    samplers: &[TaskSampler],
    seed: u64,
) -> Result<f64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let durations: BTreeMap<TaskId, f64> = samplers
        .iter()
        .map(|s| {
            let sample = random_triangular(s.low, s.mode, s.high, &mut rng);
            (s.id, sample * s.slowdown)
        })
        .collect();

    let (_, early_finish) = propagate(start, index, order, |id| durations.get(&id).copied())?;
    let finish = early_finish.values().max().copied().unwrap_or(start);
    Ok((finish - start).num_days() as f64)
}
