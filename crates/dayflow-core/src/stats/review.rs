//! Review metrics over a resolved range.
//!
//! Everything here is recomputed from scratch on each call; there is no
//! incremental state. Two scoping rules are deliberately asymmetric and
//! fixed: `completed_count` is completion-time-scoped while
//! `pending_count` follows plain range membership, and the per-priority
//! breakdown counts the completion flag rather than the completion time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::range::DateRange;
use crate::stats::membership::tasks_in_range;
use crate::task::{Priority, Task};

/// Completed/total pair for one priority bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityCount {
    pub completed: u32,
    pub total: u32,
}

/// Per-priority counts over the in-range tasks.
///
/// Tasks without a priority are not bucketed anywhere, so the three
/// totals can sum to less than the in-range count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub high: PriorityCount,
    pub medium: PriorityCount,
    pub low: PriorityCount,
}

/// Aggregated metrics for one range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewMetrics {
    /// In-range tasks whose completion instant falls inside the range,
    /// or that lack a completion instant and are in range themselves
    pub completed_count: u32,
    /// In-range tasks not yet completed
    pub pending_count: u32,
    /// Incomplete tasks due strictly before now; the range plays no part
    pub overdue_count: u32,
    /// Size of the in-range set
    pub total_in_range: u32,
    /// Sum of `actual_minutes` over in-range tasks
    pub total_time_tracked_minutes: u64,
    /// Sum of `estimated_minutes` over in-range tasks
    pub total_time_estimated_minutes: u64,
    /// `round(completed / total * 100)`, 0 for an empty range
    pub productivity_score: u32,
    pub priority_breakdown: PriorityBreakdown,
}

/// Compute the metrics for one range.
///
/// Pure over `(tasks, range, now)`: identical inputs give identical
/// output, and no combination of inputs fails.
pub fn compute_metrics(tasks: &[Task], range: &DateRange, now: DateTime<Utc>) -> ReviewMetrics {
    let in_range = tasks_in_range(tasks, range);

    let completed_count = in_range
        .iter()
        .filter(|t| t.completed)
        .filter(|t| match t.completed_at {
            Some(done) => range.contains(done),
            None => true,
        })
        .count() as u32;

    let pending_count = in_range.iter().filter(|t| !t.completed).count() as u32;

    let overdue_count = tasks
        .iter()
        .filter(|t| !t.completed)
        .filter(|t| t.due_date.map_or(false, |due| due < now))
        .count() as u32;

    let total_in_range = in_range.len() as u32;
    let total_time_tracked_minutes = in_range.iter().map(|t| t.actual_minutes as u64).sum();
    let total_time_estimated_minutes = in_range.iter().map(|t| t.estimated_minutes as u64).sum();

    let productivity_score = if total_in_range == 0 {
        0
    } else {
        ((completed_count as f64 / total_in_range as f64) * 100.0).round() as u32
    };

    let mut priority_breakdown = PriorityBreakdown::default();
    for task in &in_range {
        let bucket = match task.priority {
            Some(Priority::High) => &mut priority_breakdown.high,
            Some(Priority::Medium) => &mut priority_breakdown.medium,
            Some(Priority::Low) => &mut priority_breakdown.low,
            None => continue,
        };
        bucket.total += 1;
        if task.completed {
            bucket.completed += 1;
        }
    }

    ReviewMetrics {
        completed_count,
        pending_count,
        overdue_count,
        total_in_range,
        total_time_tracked_minutes,
        total_time_estimated_minutes,
        productivity_score,
        priority_breakdown,
    }
}

/// Format a minute total for display, e.g. "2h 5m" or "45m".
pub fn format_minutes(total: u64) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
