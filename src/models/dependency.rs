//! Task dependency model.
//!
//! A dependency is a directed precedence edge between two tasks. The type tag
//! and lag are carried for consumers but are not applied by the date math:
//! every dependency behaves as finish-to-start with zero lag.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::TaskId;

/// Precedence relation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyType {
    /// Successor starts after predecessor finishes.
    #[default]
    #[serde(rename = "FS")]
    FinishToStart,
    /// Successor starts after predecessor starts.
    #[serde(rename = "SS")]
    StartToStart,
    /// Successor finishes after predecessor finishes.
    #[serde(rename = "FF")]
    FinishToFinish,
    /// Successor finishes after predecessor starts.
    #[serde(rename = "SF")]
    StartToFinish,
}

impl DependencyType {
    /// Two-letter code (FS, SS, FF, SF).
    pub fn code(&self) -> &'static str {
        match self {
            Self::FinishToStart => "FS",
            Self::StartToStart => "SS",
            Self::FinishToFinish => "FF",
            Self::StartToFinish => "SF",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A directed edge `from -> to` in the task graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dependency {
    /// Predecessor task.
    pub from: TaskId,
    /// Successor task.
    pub to: TaskId,
    /// Relation kind (stored, not applied).
    pub dep_type: DependencyType,
    /// Lag in days (stored, not applied).
    pub lag_days: f64,
    /// Whether the dependency is hard. Informational.
    pub mandatory: bool,
}

impl Dependency {
    /// Creates a mandatory dependency of the given type with zero lag.
    pub fn new(from: TaskId, to: TaskId, dep_type: DependencyType) -> Self {
        Self {
            from,
            to,
            dep_type,
            lag_days: 0.0,
            mandatory: true,
        }
    }

    /// Creates a mandatory finish-to-start dependency with zero lag.
    pub fn finish_to_start(from: TaskId, to: TaskId) -> Self {
        Self::new(from, to, DependencyType::FinishToStart)
    }

    /// Sets the lag in days.
    pub fn with_lag(mut self, lag_days: f64) -> Self {
        self.lag_days = lag_days;
        self
    }

    /// Marks the dependency as optional.
    pub fn optional(mut self) -> Self {
        self.mandatory = false;
        self
    }
}
