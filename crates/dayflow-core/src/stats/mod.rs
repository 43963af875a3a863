//! Analytics over task snapshots.
//!
//! This module provides the review pipeline for dayflow: range
//! membership for tasks, aggregate metrics for a day or week window,
//! and completion streak tracking.

pub mod membership;
pub mod review;
pub mod streak;

pub use membership::{task_in_range, tasks_in_range};

pub use review::{
    compute_metrics, format_minutes, PriorityBreakdown, PriorityCount, ReviewMetrics,
};
