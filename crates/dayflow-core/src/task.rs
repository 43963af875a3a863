//! Task records consumed by the analytics engine.
//!
//! Tasks are read-only input: the engine computes derived views over them
//! and never writes back. Defaulting rules are applied here, at the
//! boundary, so the rest of the crate can assume typed records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

/// A task record.
///
/// Mirrors what the surrounding application persists: completion flag and
/// timestamp, optional due date, creation time, priority, and the two
/// minute counters used for time tracking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Display text
    pub text: String,
    /// Whether the task is completed
    pub completed: bool,
    /// Completion timestamp. May be absent even when `completed` is set
    /// (hand-edited files); such tasks never count toward streak activity.
    pub completed_at: Option<DateTime<Utc>>,
    /// Optional due timestamp
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Priority. Absent stays absent: the priority breakdown skips such
    /// tasks instead of bucketing them as medium.
    pub priority: Option<Priority>,
    /// Estimated effort in minutes
    #[serde(default)]
    pub estimated_minutes: u32,
    /// Tracked time in minutes
    #[serde(default)]
    pub actual_minutes: u32,
}

impl Task {
    /// Create a new task with default values.
    pub fn new(text: impl Into<String>) -> Self {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            text: text.into(),
            completed: false,
            completed_at: None,
            due_date: None,
            created_at: Utc::now(),
            priority: Some(Priority::default()),
            estimated_minutes: 0,
            actual_minutes: 0,
        }
    }

    /// Mark the task completed at the given instant.
    pub fn complete_at(&mut self, at: DateTime<Utc>) {
        self.completed = true;
        self.completed_at = Some(at);
    }
}
