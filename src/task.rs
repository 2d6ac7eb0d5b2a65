use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Planned,
    InProgress,
    Complete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Planned => "planned",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Complete => "complete",
        }
    }

    pub fn from_str(input: &str) -> Option<Self> {
        match input {
            "planned" => Some(TaskStatus::Planned),
            "in_progress" => Some(TaskStatus::InProgress),
            "complete" => Some(TaskStatus::Complete),
            _ => None,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Planned
    }
}

/// A schedulable unit of work. `start` and `end` are inclusive calendar
/// dates; `duration_days` counts the workable days the task occupies, the
/// start day included. `dependencies` holds ids of tasks that must finish
/// before this one may begin. A locked task is never rewritten by
/// recalculation and acts as a fixed anchor for its dependents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i32,
    pub name: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub duration_days: i64,
    pub dependencies: Vec<i32>,
    pub locked: bool,
    pub status: TaskStatus,
    pub category: Option<String>,
    pub budget: Option<f64>,
    pub notes: Option<String>,
    pub attachments: Vec<String>,
}

impl Task {
    pub fn new(id: i32, name: impl Into<String>, start: NaiveDate, duration_days: i64) -> Self {
        Self {
            id,
            name: name.into(),
            start,
            end: start,
            duration_days,
            dependencies: Vec::new(),
            locked: false,
            status: TaskStatus::Planned,
            category: None,
            budget: None,
            notes: None,
            attachments: Vec::new(),
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<i32>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn with_end(mut self, end: NaiveDate) -> Self {
        self.end = end;
        self
    }

    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }
}
