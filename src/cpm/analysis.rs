//! Slack and critical path analysis.
//!
//! Combines forward and backward pass results into per-task slack, the set
//! of critical tasks, and one concrete critical path.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Slack | late start - early start |
//! | Critical task | slack == 0 |
//! | Critical path | chain of critical tasks from a start task to an end task |
//! | Duration | whole days from project start to the latest early finish |

use chrono::{NaiveDateTime, TimeDelta};
use std::collections::BTreeMap;

use super::{
    compute_backward_pass_with, compute_schedule_with, delta_to_days, BackwardOrder,
    BackwardSchedule, DependencyIndex, ForwardSchedule,
};
use crate::error::Result;
use crate::estimation::SlowdownModel;
use crate::models::{Project, TaskId};

/// Deterministic schedule with slack and critical path.
#[derive(Debug, Clone)]
pub struct CriticalPathAnalysis {
    /// Forward pass output.
    pub forward: ForwardSchedule,
    /// Backward pass output.
    pub backward: BackwardSchedule,
    /// Slack per task.
    pub slack: BTreeMap<TaskId, TimeDelta>,
    /// Zero-slack tasks in ascending ID order.
    pub critical_tasks: Vec<TaskId>,
    /// One critical chain, start task first. Empty for an empty project.
    pub critical_path: Vec<TaskId>,
    /// Latest early finish. `None` for an empty project.
    pub project_finish: Option<NaiveDateTime>,
    /// Whole days from project start to `project_finish` (0 when empty).
    pub duration_days: i64,
}

impl CriticalPathAnalysis {
    /// Slack of a task in fractional days.
    pub fn slack_days(&self, task_id: TaskId) -> Option<f64> {
        self.slack.get(&task_id).map(|&s| delta_to_days(s))
    }

    /// Whether the task has zero slack.
    pub fn is_critical(&self, task_id: TaskId) -> bool {
        self.slack.get(&task_id) == Some(&TimeDelta::zero())
    }

    /// Tasks whose slack is below `days` (critical tasks included).
    pub fn near_critical(&self, days: f64) -> Vec<TaskId> {
        self.slack
            .iter()
            .filter(|(_, &s)| delta_to_days(s) < days)
            .map(|(&id, _)| id)
            .collect()
    }

    /// Sum of task durations (days) along the critical path.
    pub fn critical_path_days(&self) -> f64 {
        self.critical_path
            .iter()
            .filter_map(|id| self.forward.task_duration.get(id))
            .sum()
    }
}

/// Runs the forward pass, the backward pass and slack analysis.
pub fn analyze(
    project: &Project,
    model: &SlowdownModel,
    order: BackwardOrder,
) -> Result<CriticalPathAnalysis> {
    let forward = compute_schedule_with(project, model)?;
    let backward =
        compute_backward_pass_with(project, &forward.early_finish, &forward.task_duration, order)?;
    let index = DependencyIndex::new(project)?;

    let slack: BTreeMap<TaskId, TimeDelta> = forward
        .early_start
        .iter()
        .filter_map(|(id, &es)| backward.late_start.get(id).map(|&ls| (*id, ls - es)))
        .collect();
    let critical_tasks: Vec<TaskId> = slack
        .iter()
        .filter(|(_, &s)| s == TimeDelta::zero())
        .map(|(&id, _)| id)
        .collect();

    let project_finish = forward.project_finish();
    let duration_days = forward.duration_days(project.start_date).unwrap_or(0);
    let critical_path = match project_finish {
        Some(finish) => trace_critical_path(&forward, &slack, &index, finish),
        None => Vec::new(),
    };

    Ok(CriticalPathAnalysis {
        forward,
        backward,
        slack,
        critical_tasks,
        critical_path,
        project_finish,
        duration_days,
    })
}

/// Walks back from the critical end task finishing last, following
/// critical predecessors whose finish meets the current start exactly.
fn trace_critical_path(
    forward: &ForwardSchedule,
    slack: &BTreeMap<TaskId, TimeDelta>,
    index: &DependencyIndex,
    finish: NaiveDateTime,
) -> Vec<TaskId> {
    let critical = |id: TaskId| slack.get(&id) == Some(&TimeDelta::zero());

    let mut current = forward
        .early_finish
        .iter()
        .find(|(&id, &ef)| ef == finish && index.is_end(id) && critical(id))
        .map(|(&id, _)| id);

    let mut path = Vec::new();
    while let Some(id) = current {
        path.push(id);
        let es = forward.early_start[&id];
        current = index
            .predecessors(id)
            .iter()
            .copied()
            .filter(|&pred| critical(pred) && forward.early_finish.get(&pred) == Some(&es))
            .min();
    }
    path.reverse();
    path
}
