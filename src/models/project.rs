//! Project aggregate.
//!
//! A project bundles tasks, their dependencies, the team, and a start date.
//! The engine only reads projects; all results are returned as separate maps.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Dependency, Employee, EmployeeId, Task, TaskId};

/// A project to be scheduled and simulated.
///
/// Tasks and employees are kept in ID-ordered maps, so every scan visits
/// them in ascending ID order regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Tasks keyed by ID.
    pub tasks: BTreeMap<TaskId, Task>,
    /// Precedence edges.
    pub dependencies: Vec<Dependency>,
    /// Team members keyed by ID.
    pub employees: BTreeMap<EmployeeId, Employee>,
    /// Calendar timestamp at which tasks without predecessors start.
    pub start_date: NaiveDateTime,
}

impl Project {
    /// Creates an empty project starting at `start_date`.
    pub fn new(start_date: NaiveDateTime) -> Self {
        Self {
            tasks: BTreeMap::new(),
            dependencies: Vec::new(),
            employees: BTreeMap::new(),
            start_date,
        }
    }

    /// Adds a task, replacing any task with the same ID.
    pub fn with_task(mut self, task: Task) -> Self {
        self.tasks.insert(task.id, task);
        self
    }

    /// Adds a dependency.
    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    /// Adds an employee, replacing any employee with the same ID.
    pub fn with_employee(mut self, employee: Employee) -> Self {
        self.employees.insert(employee.id, employee);
        self
    }

    /// Looks up a task.
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.get(&id)
    }

    /// Looks up an employee.
    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    /// Number of tasks.
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the project has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Employees whose booked load exceeds their daily capacity.
    pub fn overloaded_employees(&self) -> Vec<&Employee> {
        self.employees
            .values()
            .filter(|e| e.is_overloaded())
            .collect()
    }
}
