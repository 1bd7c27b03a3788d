//! Critical Path Method: forward pass, backward pass, and slack analysis.
//!
//! # Algorithm
//!
//! 1. Index the dependency list and order tasks topologically (Kahn),
//!    failing fast on cycles.
//! 2. **Forward pass**: each task starts at the latest finish among its
//!    predecessors (or the project start) and finishes `duration` days later.
//! 3. **Backward pass**: end tasks finish at the project deadline; every
//!    other task must finish by the earliest late start of its successors.
//! 4. **Slack** = late start - early start. Zero-slack tasks are critical.
//!
//! Dependency type and lag are not applied: every edge acts as
//! finish-to-start with zero lag.
//!
//! # Date Arithmetic
//!
//! Durations are fractional days. They are converted to [`TimeDelta`]
//! rounded to the nearest microsecond, so sums along a path are exact.
//!
//! # References
//!
//! - Kelley & Walker (1959), "Critical-Path Planning and Scheduling"
//! - Kahn (1962), "Topological sorting of large networks"

mod analysis;
mod backward;
mod forward;
mod graph;

pub use analysis::{analyze, CriticalPathAnalysis};
pub use backward::{compute_backward_pass, compute_backward_pass_with, BackwardOrder, BackwardSchedule};
pub use forward::{compute_schedule, compute_schedule_with, forward_pass_with_durations, ForwardSchedule};
pub use graph::DependencyIndex;

pub(crate) use forward::propagate;

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::{Result, ScheduleError};
use crate::models::TaskId;

const MICROS_PER_DAY: f64 = 86_400_000_000.0;

/// Converts fractional days to a microsecond-rounded [`TimeDelta`].
pub fn days_to_delta(days: f64) -> TimeDelta {
    TimeDelta::microseconds((days * MICROS_PER_DAY).round() as i64)
}

/// Converts a [`TimeDelta`] to fractional days.
pub fn delta_to_days(delta: TimeDelta) -> f64 {
    match delta.num_microseconds() {
        Some(us) => us as f64 / MICROS_PER_DAY,
        None => delta.num_seconds() as f64 / 86_400.0,
    }
}

pub(crate) fn add_days(date: NaiveDateTime, days: f64, task_id: TaskId) -> Result<NaiveDateTime> {
    date.checked_add_signed(days_to_delta(days))
        .ok_or(ScheduleError::DateOverflow { task_id })
}

pub(crate) fn sub_days(date: NaiveDateTime, days: f64, task_id: TaskId) -> Result<NaiveDateTime> {
    date.checked_sub_signed(days_to_delta(days))
        .ok_or(ScheduleError::DateOverflow { task_id })
}
