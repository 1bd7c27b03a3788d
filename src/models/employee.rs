//! Employee model.
//!
//! Employees perform tasks. Each has a skill set, a per-skill efficiency
//! profile, and a current daily workload that may exceed their capacity.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

use super::EmployeeId;

/// Default maximum working hours per day.
pub const DEFAULT_MAX_DAILY_HOURS: f64 = 8.0;

/// A team member that can be assigned to tasks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: EmployeeId,
    /// Human-readable name.
    pub name: String,
    /// Skills the employee possesses.
    pub skills: BTreeSet<String>,
    /// Work-rate per skill (1.0 = baseline, 0.6 = 60%, 1.2 = 120%).
    ///
    /// May be missing entries for possessed skills; the estimator then
    /// falls back to its default efficiency.
    pub efficiency: HashMap<String, f64>,
    /// Hours per day currently booked.
    pub current_load: f64,
    /// Hours per day the employee can work without overload.
    pub max_daily_hours: f64,
    /// Probability of introducing a defect. Reporting only.
    pub error_probability: f64,
    /// Hourly cost (optional).
    pub cost_per_hour: Option<f64>,
}

impl Employee {
    /// Creates an employee with no skills and no workload.
    pub fn new(id: EmployeeId) -> Self {
        Self {
            id,
            name: String::new(),
            skills: BTreeSet::new(),
            efficiency: HashMap::new(),
            current_load: 0.0,
            max_daily_hours: DEFAULT_MAX_DAILY_HOURS,
            error_probability: 0.0,
            cost_per_hour: None,
        }
    }

    /// Sets the employee name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Adds a skill together with its efficiency.
    pub fn with_skill(mut self, skill: impl Into<String>, efficiency: f64) -> Self {
        let skill = skill.into();
        self.efficiency.insert(skill.clone(), efficiency);
        self.skills.insert(skill);
        self
    }

    /// Adds a skill without recording an efficiency for it.
    pub fn with_unrated_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    /// Sets the current daily workload in hours.
    pub fn with_load(mut self, hours: f64) -> Self {
        self.current_load = hours;
        self
    }

    /// Sets the daily capacity in hours.
    pub fn with_max_daily_hours(mut self, hours: f64) -> Self {
        self.max_daily_hours = hours;
        self
    }

    /// Sets the defect probability.
    pub fn with_error_probability(mut self, probability: f64) -> Self {
        self.error_probability = probability.clamp(0.0, 1.0);
        self
    }

    /// Sets the hourly cost.
    pub fn with_cost(mut self, cost_per_hour: f64) -> Self {
        self.cost_per_hour = Some(cost_per_hour);
        self
    }

    /// Whether the employee possesses a skill.
    pub fn has_skill(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    /// Recorded efficiency for a skill, if any.
    pub fn efficiency_for(&self, skill: &str) -> Option<f64> {
        self.efficiency.get(skill).copied()
    }

    /// Hours booked beyond daily capacity (0.0 when not overloaded).
    pub fn overload_hours(&self) -> f64 {
        (self.current_load - self.max_daily_hours).max(0.0)
    }

    /// Whether the booked load exceeds daily capacity.
    pub fn is_overloaded(&self) -> bool {
        self.current_load > self.max_daily_hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_builder() {
        let e = Employee::new(0)
            .with_name("Alexey Seniorov")
            .with_skill("architecture", 1.3)
            .with_skill("Python", 1.2)
            .with_unrated_skill("ML")
            .with_load(17.0)
            .with_error_probability(0.10)
            .with_cost(50.0);

        assert_eq!(e.id, 0);
        assert!(e.has_skill("architecture"));
        assert!(e.has_skill("ML"));
        assert!(!e.has_skill("DevOps"));
        assert_eq!(e.efficiency_for("Python"), Some(1.2));
        assert_eq!(e.efficiency_for("ML"), None);
        assert!((e.max_daily_hours - DEFAULT_MAX_DAILY_HOURS).abs() < 1e-10);
        assert_eq!(e.cost_per_hour, Some(50.0));
    }

    #[test]
    fn test_overload() {
        let rested = Employee::new(1).with_load(8.0);
        assert!(!rested.is_overloaded());
        assert!((rested.overload_hours() - 0.0).abs() < 1e-10);

        let busy = Employee::new(2).with_load(12.0).with_max_daily_hours(10.0);
        assert!(busy.is_overloaded());
        assert!((busy.overload_hours() - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_error_probability_clamping() {
        let e = Employee::new(3).with_error_probability(1.5);
        assert!((e.error_probability - 1.0).abs() < 1e-10);
    }
}
