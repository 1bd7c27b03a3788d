//! Input validation for projects.
//!
//! Optional pre-flight checks of a project before scheduling. The engine
//! itself only rejects what would break a traversal (unknown task
//! references, cycles); this module also reports data-quality problems the
//! engine tolerates. Detects:
//! - Map keys that disagree with entity IDs
//! - Dependencies on unknown tasks, and self-dependencies
//! - Circular dependencies (DAG validation)
//! - Unordered or non-positive three-point estimates
//! - Assignments to unknown employees
//! - Criticality outside 1-5, non-positive skill efficiencies
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use crate::models::{Project, TaskId};
use std::collections::{HashMap, HashSet};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A task or employee is stored under a key other than its ID.
    IdMismatch,
    /// A dependency references a task that doesn't exist.
    UnknownTask,
    /// A task depends on itself.
    SelfDependency,
    /// Dependency graph contains a cycle.
    CyclicDependency,
    /// Estimate is not `0 < optimistic <= most_likely <= pessimistic`.
    InvalidEstimate,
    /// A task is assigned to an employee that doesn't exist.
    UnknownAssignee,
    /// Criticality outside 1-5.
    InvalidCriticality,
    /// A skill efficiency is zero, negative, or not a number.
    InvalidEfficiency,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a project.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_project(project: &Project) -> ValidationResult {
    let mut errors = Vec::new();

    for (&key, task) in &project.tasks {
        if key != task.id {
            errors.push(ValidationError::new(
                ValidationErrorKind::IdMismatch,
                format!("Task stored under key {key} has ID {}", task.id),
            ));
        }

        let e = &task.estimate;
        if !e.is_ordered() || !e.is_positive() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidEstimate,
                format!(
                    "Task {} has estimate ({}, {}, {})",
                    task.id, e.optimistic, e.most_likely, e.pessimistic
                ),
            ));
        }

        if !(1..=5).contains(&task.criticality) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidCriticality,
                format!("Task {} has criticality {}", task.id, task.criticality),
            ));
        }

        for emp in &task.assigned_to {
            if !project.employees.contains_key(emp) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownAssignee,
                    format!("Task {} is assigned to unknown employee {emp}", task.id),
                ));
            }
        }
    }

    for (&key, employee) in &project.employees {
        if key != employee.id {
            errors.push(ValidationError::new(
                ValidationErrorKind::IdMismatch,
                format!("Employee stored under key {key} has ID {}", employee.id),
            ));
        }
        let mut skills: Vec<(&String, &f64)> = employee.efficiency.iter().collect();
        skills.sort_by(|a, b| a.0.cmp(b.0));
        for (skill, &eff) in skills {
            if eff.is_nan() || eff <= 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidEfficiency,
                    format!("Employee {} has efficiency {eff} for '{skill}'", employee.id),
                ));
            }
        }
    }

    for dep in &project.dependencies {
        for id in [dep.from, dep.to] {
            if !project.tasks.contains_key(&id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownTask,
                    format!("Dependency {} -> {} references unknown task {id}", dep.from, dep.to),
                ));
            }
        }
        if dep.from == dep.to {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfDependency,
                format!("Task {} depends on itself", dep.from),
            ));
        }
    }

    if let Some(cycle_err) = detect_cycles(project) {
        errors.push(cycle_err);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Detects cycles in the dependency graph using DFS.
///
/// Self-dependencies are reported separately and skipped here.
///
/// # Algorithm
/// If a back-edge is found (visiting a node currently in the recursion
/// stack), a cycle exists.
fn detect_cycles(project: &Project) -> Option<ValidationError> {
    let mut adj: HashMap<TaskId, Vec<TaskId>> = HashMap::new();
    for dep in &project.dependencies {
        if dep.from != dep.to {
            adj.entry(dep.from).or_default().push(dep.to);
        }
    }

    let mut visited = HashSet::new();
    let mut in_stack = HashSet::new();

    // Ascending order keeps the reported task stable
    for &node in project.tasks.keys() {
        if !visited.contains(&node) && has_cycle_dfs(node, &adj, &mut visited, &mut in_stack) {
            return Some(ValidationError::new(
                ValidationErrorKind::CyclicDependency,
                format!("Circular dependency detected involving task {node}"),
            ));
        }
    }

    None
}

fn has_cycle_dfs(
    node: TaskId,
    adj: &HashMap<TaskId, Vec<TaskId>>,
    visited: &mut HashSet<TaskId>,
    in_stack: &mut HashSet<TaskId>,
) -> bool {
    visited.insert(node);
    in_stack.insert(node);

    if let Some(neighbors) = adj.get(&node) {
        for &next in neighbors {
            if in_stack.contains(&next) {
                return true; // Back edge → cycle
            }
            if !visited.contains(&next) && has_cycle_dfs(next, adj, visited, in_stack) {
                return true;
            }
        }
    }

    in_stack.remove(&node);
    false
}
