//! Backward pass: latest start and finish dates.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::{sub_days, DependencyIndex};
use crate::error::{Result, ScheduleError};
use crate::models::{Project, TaskId};

/// Order in which the backward pass visits tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackwardOrder {
    /// Reverse topological order. Every successor is resolved first.
    #[default]
    Topological,
    /// Early finish descending, ties in ascending ID.
    ///
    /// Legacy heuristic kept for regression comparison. A successor that is
    /// not yet resolved is treated as finishing at the project deadline, so
    /// tasks feeding zero-duration successors can get too much slack.
    EarlyFinishDescending,
}

/// Output of a backward pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BackwardSchedule {
    /// Latest start per task.
    pub late_start: BTreeMap<TaskId, NaiveDateTime>,
    /// Latest finish per task.
    pub late_finish: BTreeMap<TaskId, NaiveDateTime>,
}

/// Backward pass in reverse topological order.
///
/// # Arguments
/// * `early_finish` - Early finish dates from the forward pass.
/// * `task_duration` - Durations (days) from the forward pass.
pub fn compute_backward_pass(
    project: &Project,
    early_finish: &BTreeMap<TaskId, NaiveDateTime>,
    task_duration: &BTreeMap<TaskId, f64>,
) -> Result<BackwardSchedule> {
    compute_backward_pass_with(project, early_finish, task_duration, BackwardOrder::Topological)
}

/// Backward pass with an explicit visiting order.
///
/// The project deadline is the latest early finish. End tasks finish at the
/// deadline; any other task finishes at the earliest late start among its
/// successors.
///
/// # Errors
/// - [`ScheduleError::MissingEarlyFinish`] / [`ScheduleError::MissingDuration`]
///   if the maps do not cover every project task.
/// - Graph errors from [`DependencyIndex`].
pub fn compute_backward_pass_with(
    project: &Project,
    early_finish: &BTreeMap<TaskId, NaiveDateTime>,
    task_duration: &BTreeMap<TaskId, f64>,
    order: BackwardOrder,
) -> Result<BackwardSchedule> {
    let mut late_start = BTreeMap::new();
    let mut late_finish = BTreeMap::new();

    for &id in project.tasks.keys() {
        if !early_finish.contains_key(&id) {
            return Err(ScheduleError::MissingEarlyFinish { task_id: id });
        }
        if !task_duration.contains_key(&id) {
            return Err(ScheduleError::MissingDuration { task_id: id });
        }
    }

    let Some(deadline) = project
        .tasks
        .keys()
        .filter_map(|id| early_finish.get(id))
        .max()
        .copied()
    else {
        return Ok(BackwardSchedule::default());
    };

    let index = DependencyIndex::new(project)?;
    let visit: Vec<TaskId> = match order {
        BackwardOrder::Topological => {
            let mut topo = index.topological_order()?;
            topo.reverse();
            topo
        }
        BackwardOrder::EarlyFinishDescending => {
            index.topological_order()?;
            let mut ids: Vec<TaskId> = project.tasks.keys().copied().collect();
            // Stable: ties keep ascending ID
            ids.sort_by(|a, b| early_finish[b].cmp(&early_finish[a]));
            ids
        }
    };

    for id in visit {
        let lf = index
            .successors(id)
            .iter()
            .map(|succ| late_start.get(succ).copied().unwrap_or(deadline))
            .min()
            .unwrap_or(deadline);
        let ls = sub_days(lf, task_duration[&id], id)?;

        late_finish.insert(id, lf);
        late_start.insert(id, ls);
    }

    debug!(tasks = late_start.len(), %deadline, ?order, "backward pass complete");
    Ok(BackwardSchedule {
        late_start,
        late_finish,
    })
}
