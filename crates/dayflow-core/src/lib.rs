//! # Dayflow Core Library
//!
//! This library provides the core analytics for the dayflow task tracker.
//! Given a snapshot of tasks with completion, due, and creation timestamps,
//! it computes windowed review metrics (counts, time sums, a productivity
//! score, priority breakdowns) and a day-level completion streak.
//!
//! ## Architecture
//!
//! - **Ranges**: day and week windows resolved to inclusive local-time
//!   bounds with a display label
//! - **Stats**: range membership, review metrics, and streak reconciliation,
//!   all pure functions over an immutable task snapshot
//! - **Storage**: JSON persistence for the task collection and the
//!   streak record
//!
//! ## Key Components
//!
//! - [`DateRange`]: window resolution and instant membership
//! - [`compute_metrics`]: aggregate metrics for one window
//! - [`StreakTracker`]: load-reconcile-save cycle over a [`StreakStore`]
//! - [`TaskStore`]: task collection persistence

pub mod error;
pub mod range;
pub mod stats;
pub mod storage;
pub mod task;

pub use error::{CoreError, Result, StorageError};
pub use range::{navigate, DateRange, NavDirection, ViewMode};
pub use stats::{
    compute_metrics, format_minutes, task_in_range, tasks_in_range, PriorityBreakdown,
    PriorityCount, ReviewMetrics,
};
pub use stats::streak::{
    active_days, completed_today, current_streak, high_priority_done, longest_run,
    motivation_message, recompute, weekly_progress, MemoryStreakStore, StreakState, StreakStore,
    StreakTracker,
};
pub use storage::{data_dir, JsonStreakStore, TaskStore};
pub use task::{Priority, Task};
