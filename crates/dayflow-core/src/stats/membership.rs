//! Range membership for tasks.
//!
//! A task belongs to a range under exactly one of three rules, tried in
//! order: its due date falls in the range; otherwise its completion time
//! falls in the range; otherwise, only when it has no due date at all,
//! its creation time falls in the range. The order is load-bearing: it
//! decides which bucket a task with both a due date and a completion
//! time lands in, so it lives in this one function instead of being
//! inlined at call sites.

use crate::range::DateRange;
use crate::task::Task;

/// Test a single task against the three-tier rule.
pub fn task_in_range(task: &Task, range: &DateRange) -> bool {
    if let Some(due) = task.due_date {
        if range.contains(due) {
            return true;
        }
    }
    if let Some(done) = task.completed_at {
        if range.contains(done) {
            return true;
        }
    }
    if task.due_date.is_none() && range.contains(task.created_at) {
        return true;
    }
    false
}

/// Filter a snapshot down to the tasks belonging to `range`.
///
/// Linear scan; the contract is range in, matching tasks out, so a
/// date-bucketed index could replace the scan without touching callers.
pub fn tasks_in_range<'a>(tasks: &'a [Task], range: &DateRange) -> Vec<&'a Task> {
    tasks.iter().filter(|t| task_in_range(t, range)).collect()
}
