//! Dependency index over the task graph.
//!
//! Precomputes predecessor and successor lists from the project's dependency
//! list so lookups are O(1), and derives a topological order.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{Result, ScheduleError};
use crate::models::{Project, TaskId};

/// Predecessor/successor adjacency for every task in a project.
///
/// Lists keep the order in which dependencies were declared. A dependency
/// declared twice appears twice; this does not change any date.
#[derive(Debug, Clone, Default)]
pub struct DependencyIndex {
    predecessors: BTreeMap<TaskId, Vec<TaskId>>,
    successors: BTreeMap<TaskId, Vec<TaskId>>,
}

impl DependencyIndex {
    /// Builds the index.
    ///
    /// # Errors
    /// [`ScheduleError::UnknownTask`] if a dependency endpoint is not a
    /// project task.
    pub fn new(project: &Project) -> Result<Self> {
        let mut predecessors: BTreeMap<TaskId, Vec<TaskId>> =
            project.tasks.keys().map(|&id| (id, Vec::new())).collect();
        let mut successors = predecessors.clone();

        for dep in &project.dependencies {
            if !project.tasks.contains_key(&dep.from) || !project.tasks.contains_key(&dep.to) {
                return Err(ScheduleError::UnknownTask {
                    from: dep.from,
                    to: dep.to,
                });
            }
            predecessors.entry(dep.to).or_default().push(dep.from);
            successors.entry(dep.from).or_default().push(dep.to);
        }

        Ok(Self {
            predecessors,
            successors,
        })
    }

    /// Tasks that must finish before `task_id` starts.
    pub fn predecessors(&self, task_id: TaskId) -> &[TaskId] {
        self.predecessors
            .get(&task_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Tasks that wait on `task_id`.
    pub fn successors(&self, task_id: TaskId) -> &[TaskId] {
        self.successors
            .get(&task_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether the task has no predecessors.
    pub fn is_start(&self, task_id: TaskId) -> bool {
        self.predecessors(task_id).is_empty()
    }

    /// Whether the task has no successors.
    pub fn is_end(&self, task_id: TaskId) -> bool {
        self.successors(task_id).is_empty()
    }

    /// Number of indexed tasks.
    pub fn len(&self) -> usize {
        self.predecessors.len()
    }

    /// Whether no tasks are indexed.
    pub fn is_empty(&self) -> bool {
        self.predecessors.is_empty()
    }

    /// Orders tasks so every predecessor precedes its successors.
    ///
    /// # Algorithm
    /// Kahn's algorithm. Among ready tasks the smallest ID goes first, which
    /// reproduces a repeated scan in ascending-ID order.
    ///
    /// # Errors
    /// [`ScheduleError::CyclicDependency`] listing every task that could not
    /// be ordered.
    pub fn topological_order(&self) -> Result<Vec<TaskId>> {
        let mut in_degree: BTreeMap<TaskId, usize> = self
            .predecessors
            .iter()
            .map(|(&id, preds)| (id, preds.len()))
            .collect();
        let mut ready: BTreeSet<TaskId> = in_degree
            .iter()
            .filter(|(_, &deg)| deg == 0)
            .map(|(&id, _)| id)
            .collect();
        let mut order = Vec::with_capacity(in_degree.len());

        while let Some(id) = ready.pop_first() {
            order.push(id);
            for &succ in self.successors(id) {
                if let Some(deg) = in_degree.get_mut(&succ) {
                    *deg -= 1;
                    if *deg == 0 {
                        ready.insert(succ);
                    }
                }
            }
        }

        if order.len() < in_degree.len() {
            let task_ids = in_degree
                .into_iter()
                .filter(|&(_, deg)| deg > 0)
                .map(|(id, _)| id)
                .collect();
            return Err(ScheduleError::CyclicDependency { task_ids });
        }

        Ok(order)
    }
}
