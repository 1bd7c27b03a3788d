//! Project risk domain models.
//!
//! Provides the input types the engine reads: tasks with three-point
//! estimates, employees with skill/workload profiles, dependencies, and the
//! project aggregate. The engine never mutates these.
//!
//! # Domain Mappings
//!
//! | u-risk-schedule | Software | Construction | Research |
//! |-----------------|----------|--------------|----------|
//! | Task | Work item | Trade package | Experiment |
//! | Employee | Developer | Crew lead | Researcher |
//! | Dependency | Blocker | Sequence link | Prerequisite |
//! | Project | Release | Site programme | Grant plan |

mod dependency;
mod employee;
mod project;
mod task;

pub use dependency::{Dependency, DependencyType};
pub use employee::{Employee, DEFAULT_MAX_DAILY_HOURS};
pub use project::Project;
pub use task::{Task, ThreePointEstimate};

/// Task identifier.
pub type TaskId = u32;

/// Employee identifier.
pub type EmployeeId = u32;
