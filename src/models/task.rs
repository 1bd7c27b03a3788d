//! Task model.
//!
//! A task is a unit of project work with a three-point duration estimate,
//! the skills it requires, and the employees assigned to it.
//!
//! # Reference
//! Malcolm et al. (1959), "Application of a Technique for Research and
//! Development Program Evaluation" (PERT)

use serde::{Deserialize, Serialize};

use super::{EmployeeId, TaskId};

/// A project task.
///
/// # Time Representation
/// Durations are in (fractional) calendar days. The engine never converts
/// them to working hours; calendars and holidays are out of scope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier.
    pub id: TaskId,
    /// Human-readable name.
    pub name: String,
    /// Skills the task requires (matched against `Employee.skills`).
    pub required_skills: Vec<String>,
    /// Optimistic / most-likely / pessimistic duration in days.
    pub estimate: ThreePointEstimate,
    /// Assigned employees. The first entry is the primary assignee.
    pub assigned_to: Vec<EmployeeId>,
    /// Criticality rank, 1 (low) to 5 (highest). Reporting only.
    pub criticality: u8,
    /// Budgeted cost. Reporting only.
    pub cost: f64,
}

impl Task {
    /// Creates a task with the given ID and duration estimate.
    pub fn new(id: TaskId, estimate: ThreePointEstimate) -> Self {
        Self {
            id,
            name: String::new(),
            required_skills: Vec::new(),
            estimate,
            assigned_to: Vec::new(),
            criticality: 3,
            cost: 0.0,
        }
    }

    /// Sets the task name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a required skill.
    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.required_skills.push(skill.into());
        self
    }

    /// Appends an assignee. The first call sets the primary assignee.
    pub fn with_assignee(mut self, employee_id: EmployeeId) -> Self {
        self.assigned_to.push(employee_id);
        self
    }

    /// Sets the criticality rank.
    pub fn with_criticality(mut self, criticality: u8) -> Self {
        self.criticality = criticality;
        self
    }

    /// Sets the budgeted cost.
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// The primary assignee's ID, if any employee is assigned.
    pub fn primary_assignee_id(&self) -> Option<EmployeeId> {
        self.assigned_to.first().copied()
    }

    /// Whether any employee is assigned.
    pub fn is_assigned(&self) -> bool {
        !self.assigned_to.is_empty()
    }
}

/// Three-point duration estimate in days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThreePointEstimate {
    /// Best-case duration.
    pub optimistic: f64,
    /// Most likely duration (the triangular mode).
    pub most_likely: f64,
    /// Worst-case duration.
    pub pessimistic: f64,
}

impl ThreePointEstimate {
    /// Creates an estimate. Ordering is not enforced here; see
    /// [`validate_project`](crate::validation::validate_project).
    pub fn new(optimistic: f64, most_likely: f64, pessimistic: f64) -> Self {
        Self {
            optimistic,
            most_likely,
            pessimistic,
        }
    }

    /// A zero-width estimate where all three points coincide.
    pub fn fixed(days: f64) -> Self {
        Self::new(days, days, days)
    }

    /// PERT weighted mean: `(o + 4m + p) / 6`.
    #[inline]
    pub fn pert_mean(&self) -> f64 {
        (self.optimistic + 4.0 * self.most_likely + self.pessimistic) / 6.0
    }

    /// Spread between pessimistic and optimistic bounds.
    #[inline]
    pub fn range(&self) -> f64 {
        self.pessimistic - self.optimistic
    }

    /// Whether `optimistic <= most_likely <= pessimistic`.
    pub fn is_ordered(&self) -> bool {
        self.optimistic <= self.most_likely && self.most_likely <= self.pessimistic
    }

    /// Whether every point is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.optimistic > 0.0 && self.most_likely > 0.0 && self.pessimistic > 0.0
    }
}
