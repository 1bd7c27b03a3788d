//! Duration estimation with human-factor adjustment.
//!
//! Converts a task's three-point estimate into an expected duration, scaled
//! by how well the primary assignee fits the task.
//!
//! # Slowdown Model
//!
//! | Situation | Factor |
//! |-----------|--------|
//! | Assignee has none of the required skills | `total_mismatch_penalty` (3.0) |
//! | Assignee lacks some skills | `partial_mismatch_base + missing/total * partial_mismatch_ratio_weight` (2.0 + ratio) |
//! | Assignee has every skill | `1 / min_efficiency * overload` |
//!
//! where `overload = 1 + (load - max_hours) * overload_coefficient` when the
//! assignee is booked beyond capacity, else 1.
//!
//! # Reference
//! Malcolm et al. (1959), PERT three-point estimation

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, ScheduleError};
use crate::models::{Employee, Project, Task};

/// Tunable constants of the skill/workload slowdown model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlowdownModel {
    /// Factor when the assignee has none of the required skills.
    pub total_mismatch_penalty: f64,
    /// Base factor when some required skills are missing.
    pub partial_mismatch_base: f64,
    /// Weight of the missing-skill ratio added to the base.
    pub partial_mismatch_ratio_weight: f64,
    /// Efficiency assumed for a possessed skill with no recorded rating.
    pub default_efficiency: f64,
    /// Slowdown per hour booked beyond daily capacity.
    pub overload_coefficient: f64,
}

impl Default for SlowdownModel {
    fn default() -> Self {
        Self {
            total_mismatch_penalty: 3.0,
            partial_mismatch_base: 2.0,
            partial_mismatch_ratio_weight: 1.0,
            default_efficiency: 0.20,
            overload_coefficient: 0.05,
        }
    }
}

impl SlowdownModel {
    /// Sets the total-mismatch penalty.
    pub fn with_total_mismatch_penalty(mut self, penalty: f64) -> Self {
        self.total_mismatch_penalty = penalty;
        self
    }

    /// Sets the partial-mismatch base and ratio weight.
    pub fn with_partial_mismatch(mut self, base: f64, ratio_weight: f64) -> Self {
        self.partial_mismatch_base = base;
        self.partial_mismatch_ratio_weight = ratio_weight;
        self
    }

    /// Sets the fallback efficiency for unrated skills.
    pub fn with_default_efficiency(mut self, efficiency: f64) -> Self {
        self.default_efficiency = efficiency;
        self
    }

    /// Sets the per-hour overload coefficient.
    pub fn with_overload_coefficient(mut self, coefficient: f64) -> Self {
        self.overload_coefficient = coefficient;
        self
    }

    /// Rejects constants that would make durations undefined.
    pub fn validate(&self) -> Result<()> {
        if self.default_efficiency.is_nan() || self.default_efficiency <= 0.0 {
            return Err(ScheduleError::InvalidConfig(format!(
                "default_efficiency must be positive, got {}",
                self.default_efficiency
            )));
        }
        let factors = [
            ("total_mismatch_penalty", self.total_mismatch_penalty),
            ("partial_mismatch_base", self.partial_mismatch_base),
            ("partial_mismatch_ratio_weight", self.partial_mismatch_ratio_weight),
            ("overload_coefficient", self.overload_coefficient),
        ];
        for (name, value) in factors {
            if !value.is_finite() || value < 0.0 {
                return Err(ScheduleError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Slowdown of `employee` working on `task` (larger = slower).
    ///
    /// The partial-mismatch branch depends only on the missing ratio;
    /// efficiencies and workload are consulted only when every required
    /// skill is present. A task with no required skills counts as a total
    /// mismatch.
    pub fn slowdown_factor(&self, employee: &Employee, task: &Task) -> f64 {
        let total = task.required_skills.len();
        let missing = task
            .required_skills
            .iter()
            .filter(|skill| !employee.has_skill(skill))
            .count();

        if missing == total {
            return self.total_mismatch_penalty;
        }
        if missing > 0 {
            let ratio = missing as f64 / total as f64;
            return self.partial_mismatch_base + ratio * self.partial_mismatch_ratio_weight;
        }

        let min_efficiency = task
            .required_skills
            .iter()
            .map(|skill| {
                employee
                    .efficiency_for(skill)
                    .unwrap_or(self.default_efficiency)
            })
            .fold(f64::INFINITY, f64::min);

        (1.0 / min_efficiency) * self.overload_slowdown(employee)
    }

    /// Workload multiplier: 1.0 within capacity, growing linearly per
    /// overbooked hour.
    pub fn overload_slowdown(&self, employee: &Employee) -> f64 {
        if employee.current_load <= employee.max_daily_hours {
            1.0
        } else {
            1.0 + (employee.current_load - employee.max_daily_hours) * self.overload_coefficient
        }
    }

    /// Slowdown of the task's primary assignee, or `None` when the task is
    /// unassigned or the assignee is not a project employee.
    pub fn assignee_slowdown(&self, task: &Task, project: &Project) -> Option<f64> {
        primary_assignee(task, project).map(|employee| self.slowdown_factor(employee, task))
    }

    /// Expected duration in days: PERT mean times the assignee slowdown.
    ///
    /// Without a project, or when no primary assignee resolves, the
    /// unadjusted PERT mean is returned.
    pub fn task_duration(&self, task: &Task, project: Option<&Project>) -> f64 {
        let base = task.estimate.pert_mean();
        let Some(project) = project else {
            return base;
        };
        match self.assignee_slowdown(task, project) {
            Some(slowdown) => base * slowdown,
            None => {
                if let Some(employee_id) = task.primary_assignee_id() {
                    debug!(
                        task_id = task.id,
                        employee_id, "primary assignee not found, using base duration"
                    );
                }
                base
            }
        }
    }
}

/// Resolves the first assigned employee of a task.
pub fn primary_assignee<'a>(task: &Task, project: &'a Project) -> Option<&'a Employee> {
    task.primary_assignee_id()
        .and_then(|employee_id| project.employee(employee_id))
}

/// [`SlowdownModel::slowdown_factor`] with default constants.
pub fn slowdown_factor(employee: &Employee, task: &Task) -> f64 {
    SlowdownModel::default().slowdown_factor(employee, task)
}

/// [`SlowdownModel::task_duration`] with default constants.
pub fn task_duration(task: &Task, project: Option<&Project>) -> f64 {
    SlowdownModel::default().task_duration(task, project)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ThreePointEstimate;
    use chrono::NaiveDate;

    fn project_with(employee: Employee, task: Task) -> Project {
        let start = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        Project::new(start).with_employee(employee).with_task(task)
    }

    fn python_task() -> Task {
        Task::new(0, ThreePointEstimate::new(2.0, 3.0, 4.0))
            .with_skill("Python")
            .with_skill("testing")
    }

    #[test]
    fn test_total_mismatch() {
        let e = Employee::new(0).with_skill("UI/UX", 1.0);
        assert!((slowdown_factor(&e, &python_task()) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_mismatch_ignores_efficiency() {
        let slow = Employee::new(0).with_skill("Python", 0.1);
        let fast = Employee::new(1).with_skill("Python", 2.0).with_load(20.0);
        // 2.0 + 1/2
        assert!((slowdown_factor(&slow, &python_task()) - 2.5).abs() < 1e-10);
        assert!((slowdown_factor(&fast, &python_task()) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_full_match_uses_min_efficiency() {
        let e = Employee::new(0)
            .with_skill("Python", 1.0)
            .with_skill("testing", 0.8);
        assert!((slowdown_factor(&e, &python_task()) - 1.25).abs() < 1e-10);
    }

    #[test]
    fn test_unrated_skill_uses_default_efficiency() {
        let e = Employee::new(0)
            .with_skill("Python", 1.0)
            .with_unrated_skill("testing");
        assert!((slowdown_factor(&e, &python_task()) - 5.0).abs() < 1e-10);

        let lenient = SlowdownModel::default().with_default_efficiency(0.5);
        assert!((lenient.slowdown_factor(&e, &python_task()) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_overload_slowdown() {
        let e = Employee::new(0)
            .with_skill("Python", 1.0)
            .with_skill("testing", 1.0)
            .with_load(12.0);
        // 1 + 4h * 0.05
        assert!((slowdown_factor(&e, &python_task()) - 1.2).abs() < 1e-10);

        let at_capacity = e.clone().with_load(8.0);
        assert!((slowdown_factor(&at_capacity, &python_task()) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_senior_architect() {
        // Efficiency 1.3, load 17h: (1 / 1.3) * (1 + 9 * 0.05)
        let e = Employee::new(0)
            .with_skill("architecture", 1.3)
            .with_load(17.0);
        let task = Task::new(0, ThreePointEstimate::new(3.0, 5.0, 8.0)).with_skill("architecture");
        assert!((slowdown_factor(&e, &task) - 1.115_384_615_384_615).abs() < 1e-9);
    }

    #[test]
    fn test_no_required_skills_counts_as_total_mismatch() {
        let e = Employee::new(0).with_skill("Python", 1.0);
        let task = Task::new(0, ThreePointEstimate::fixed(1.0));
        assert!((slowdown_factor(&e, &task) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_custom_constants() {
        let model = SlowdownModel::default()
            .with_total_mismatch_penalty(4.0)
            .with_partial_mismatch(1.5, 2.0)
            .with_overload_coefficient(0.1);

        let none = Employee::new(0);
        assert!((model.slowdown_factor(&none, &python_task()) - 4.0).abs() < 1e-10);

        let half = Employee::new(1).with_skill("testing", 1.0);
        assert!((model.slowdown_factor(&half, &python_task()) - 2.5).abs() < 1e-10);

        let busy = Employee::new(2)
            .with_skill("Python", 1.0)
            .with_skill("testing", 1.0)
            .with_load(10.0);
        assert!((model.slowdown_factor(&busy, &python_task()) - 1.2).abs() < 1e-10);
    }

    #[test]
    fn test_task_duration_without_project() {
        let task = python_task().with_assignee(0);
        assert!((task_duration(&task, None) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_task_duration_unassigned() {
        let task = python_task();
        let p = project_with(Employee::new(0), task.clone());
        assert!((task_duration(&task, Some(&p)) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_task_duration_unknown_assignee() {
        let task = python_task().with_assignee(42);
        let p = project_with(Employee::new(0), task.clone());
        assert!(primary_assignee(&task, &p).is_none());
        assert!((task_duration(&task, Some(&p)) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_task_duration_triples_on_total_mismatch() {
        let task = python_task().with_assignee(0);
        let p = project_with(Employee::new(0).with_skill("DevOps", 1.0), task.clone());
        assert!((task_duration(&task, Some(&p)) - 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_only_primary_assignee_counts() {
        let task = python_task().with_assignee(0).with_assignee(1);
        let start = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let p = Project::new(start)
            .with_employee(
                Employee::new(0)
                    .with_skill("Python", 1.0)
                    .with_skill("testing", 1.0),
            )
            .with_employee(Employee::new(1))
            .with_task(task.clone());
        assert_eq!(primary_assignee(&task, &p).map(|e| e.id), Some(0));
        assert!((task_duration(&task, Some(&p)) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate() {
        assert!(SlowdownModel::default().validate().is_ok());
        assert!(matches!(
            SlowdownModel::default().with_default_efficiency(0.0).validate(),
            Err(ScheduleError::InvalidConfig(_))
        ));
        assert!(SlowdownModel::default()
            .with_overload_coefficient(-0.1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_serde_defaults() {
        let model: SlowdownModel =
            serde_json::from_str(r#"{ "total_mismatch_penalty": 4.0 }"#).unwrap();
        assert!((model.total_mismatch_penalty - 4.0).abs() < 1e-10);
        assert!((model.default_efficiency - 0.20).abs() < 1e-10);
        assert!((model.overload_coefficient - 0.05).abs() < 1e-10);
    }
}
