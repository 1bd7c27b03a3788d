//! Engine errors.

use crate::models::TaskId;

/// Convenience alias for engine results.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors raised by the scheduling and simulation engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScheduleError {
    /// The dependency graph is not a DAG.
    #[error("cyclic dependency among tasks {task_ids:?}")]
    CyclicDependency { task_ids: Vec<TaskId> },

    /// A dependency references a task that is not in the project.
    #[error("dependency {from} -> {to} references an unknown task")]
    UnknownTask { from: TaskId, to: TaskId },

    /// The backward pass was given no early finish for a task.
    #[error("no early finish date for task {task_id}")]
    MissingEarlyFinish { task_id: TaskId },

    /// A pass was given no duration for a task.
    #[error("no duration for task {task_id}")]
    MissingDuration { task_id: TaskId },

    /// Date arithmetic left the representable calendar range.
    #[error("date out of range while scheduling task {task_id}")]
    DateOverflow { task_id: TaskId },

    /// Engine configuration is unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
