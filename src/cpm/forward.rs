//! Forward pass: earliest start and finish dates.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::{add_days, DependencyIndex};
use crate::error::{Result, ScheduleError};
use crate::estimation::SlowdownModel;
use crate::models::{Project, TaskId};

/// Output of a deterministic forward pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForwardSchedule {
    /// Earliest start per task.
    pub early_start: BTreeMap<TaskId, NaiveDateTime>,
    /// Earliest finish per task.
    pub early_finish: BTreeMap<TaskId, NaiveDateTime>,
    /// Expected duration per task (days).
    pub task_duration: BTreeMap<TaskId, f64>,
}

impl ForwardSchedule {
    /// Latest early finish across all tasks. `None` for an empty project.
    pub fn project_finish(&self) -> Option<NaiveDateTime> {
        self.early_finish.values().max().copied()
    }

    /// Whole days from `start` to the project finish (truncated).
    pub fn duration_days(&self, start: NaiveDateTime) -> Option<i64> {
        self.project_finish()
            .map(|finish| (finish - start).num_days())
    }

    /// Number of scheduled tasks.
    pub fn len(&self) -> usize {
        self.early_start.len()
    }

    /// Whether no task was scheduled.
    pub fn is_empty(&self) -> bool {
        self.early_start.is_empty()
    }
}

/// Forward pass with default slowdown constants.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use u_risk_schedule::cpm::compute_schedule;
/// use u_risk_schedule::models::{Dependency, Project, Task, ThreePointEstimate};
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
/// let project = Project::new(start)
///     .with_task(Task::new(0, ThreePointEstimate::new(2.0, 3.0, 4.0)))
///     .with_task(Task::new(1, ThreePointEstimate::new(4.0, 5.0, 6.0)))
///     .with_dependency(Dependency::finish_to_start(0, 1));
///
/// let schedule = compute_schedule(&project).unwrap();
/// assert_eq!(schedule.duration_days(start), Some(8));
/// ```
pub fn compute_schedule(project: &Project) -> Result<ForwardSchedule> {
    compute_schedule_with(project, &SlowdownModel::default())
}

/// Forward pass using durations from `model`.
///
/// # Errors
/// [`ScheduleError::UnknownTask`] or [`ScheduleError::CyclicDependency`]
/// before any date is computed.
pub fn compute_schedule_with(project: &Project, model: &SlowdownModel) -> Result<ForwardSchedule> {
    let index = DependencyIndex::new(project)?;
    let order = index.topological_order()?;

    let task_duration: BTreeMap<TaskId, f64> = project
        .tasks
        .iter()
        .map(|(&id, task)| (id, model.task_duration(task, Some(project))))
        .collect();

    let (early_start, early_finish) = propagate(project.start_date, &index, &order, |id| {
        task_duration.get(&id).copied()
    })?;

    let schedule = ForwardSchedule {
        early_start,
        early_finish,
        task_duration,
    };
    debug!(
        tasks = schedule.len(),
        finish = ?schedule.project_finish(),
        "forward pass complete"
    );
    Ok(schedule)
}

/// Forward pass over caller-supplied durations. Returns early finish dates.
///
/// # Errors
/// [`ScheduleError::MissingDuration`] if `durations` lacks a task, plus the
/// graph errors of [`compute_schedule_with`].
pub fn forward_pass_with_durations(
    project: &Project,
    durations: &BTreeMap<TaskId, f64>,
) -> Result<BTreeMap<TaskId, NaiveDateTime>> {
    let index = DependencyIndex::new(project)?;
    let order = index.topological_order()?;
    let (_, early_finish) =
        propagate(project.start_date, &index, &order, |id| durations.get(&id).copied())?;
    Ok(early_finish)
}

/// Core date propagation over a precomputed topological order.
pub(crate) fn propagate<D>(
    start: NaiveDateTime,
    index: &DependencyIndex,
    order: &[TaskId],
    duration_of: D,
) -> Result<(BTreeMap<TaskId, NaiveDateTime>, BTreeMap<TaskId, NaiveDateTime>)>
where
    D: Fn(TaskId) -> Option<f64>,
{
    let mut early_start = BTreeMap::new();
    let mut early_finish: BTreeMap<TaskId, NaiveDateTime> = BTreeMap::new();

    for &id in order {
        // Predecessors are finished: `order` is topological
        let es = index
            .predecessors(id)
            .iter()
            .filter_map(|pred| early_finish.get(pred))
            .max()
            .copied()
            .unwrap_or(start);
        let duration = duration_of(id).ok_or(ScheduleError::MissingDuration { task_id: id })?;
        let ef = add_days(es, duration, id)?;

        early_start.insert(id, es);
        early_finish.insert(id, ef);
    }

    Ok((early_start, early_finish))
}
