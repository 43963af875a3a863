//! Day-level completion streaks.
//!
//! Activity is derived from the full task snapshot, not a range: every
//! local calendar day with at least one timestamped completion is an
//! active day. The persisted [`StreakState`] is reconciled against the
//! snapshot on each recomputation through a narrow load/save contract,
//! so the calculator stays testable with an in-memory store.

use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::task::{Priority, Task};

/// Persisted streak record.
///
/// `longest_streak` is a ratchet: recomputations only ever raise it. The
/// goal fields are user configuration and pass through reconciliation
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakState {
    /// Consecutive active days ending today or yesterday
    #[serde(default)]
    pub current_streak: u32,
    /// Best run ever observed
    #[serde(default)]
    pub longest_streak: u32,
    /// Most recent active day
    #[serde(default)]
    pub last_active_date: Option<NaiveDate>,
    /// Distinct active days in the current snapshot
    #[serde(default)]
    pub total_days_active: u32,
    /// Weekly active-day target
    #[serde(default = "default_weekly_goal")]
    pub weekly_goal: u32,
    /// Monthly active-day target
    #[serde(default = "default_monthly_goal")]
    pub monthly_goal: u32,
}

fn default_weekly_goal() -> u32 {
    5
}

fn default_monthly_goal() -> u32 {
    20
}

impl Default for StreakState {
    fn default() -> Self {
        Self {
            current_streak: 0,
            longest_streak: 0,
            last_active_date: None,
            total_days_active: 0,
            weekly_goal: default_weekly_goal(),
            monthly_goal: default_monthly_goal(),
        }
    }
}

/// Distinct local calendar days with at least one timestamped completion.
///
/// Completed tasks without a completion instant contribute nothing:
/// streak days must be anchored to a concrete date.
pub fn active_days(tasks: &[Task]) -> BTreeSet<NaiveDate> {
    tasks
        .iter()
        .filter(|t| t.completed)
        .filter_map(|t| t.completed_at)
        .map(|at| at.with_timezone(&Local).date_naive())
        .collect()
}

/// Consecutive active days ending at `today`, or at yesterday when today
/// has no activity yet. 0 when the most recent active day is older than
/// yesterday.
pub fn current_streak(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let most_recent = match days.iter().next_back() {
        Some(d) => *d,
        None => return 0,
    };
    let yesterday = today.pred_opt();
    if most_recent != today && Some(most_recent) != yesterday {
        return 0;
    }

    let mut cursor = if days.contains(&today) {
        Some(today)
    } else {
        yesterday
    };
    let mut streak = 0;
    while let Some(day) = cursor {
        if !days.contains(&day) {
            break;
        }
        streak += 1;
        cursor = day.pred_opt();
    }
    streak
}

/// Longest run of consecutive days in the set.
pub fn longest_run(days: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for day in days {
        run = match prev {
            Some(p) if (*day - p).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(*day);
    }
    longest
}

/// Reconcile a snapshot against the previous state.
///
/// `total_days_active` and `last_active_date` are fresh views of the
/// snapshot; deleting every task resets them. `longest_streak` survives
/// through the ratchet even when the snapshot no longer reaches it.
pub fn recompute(tasks: &[Task], today: NaiveDate, prev: &StreakState) -> StreakState {
    let days = active_days(tasks);
    StreakState {
        current_streak: current_streak(&days, today),
        longest_streak: longest_run(&days).max(prev.longest_streak),
        last_active_date: days.iter().next_back().copied(),
        total_days_active: days.len() as u32,
        weekly_goal: prev.weekly_goal,
        monthly_goal: prev.monthly_goal,
    }
}

/// Percentage of the weekly goal met in the trailing 7-day window, today
/// inclusive, floored to an integer and clamped to 100. 0 when the goal
/// is 0.
pub fn weekly_progress(tasks: &[Task], today: NaiveDate, weekly_goal: u32) -> u32 {
    if weekly_goal == 0 {
        return 0;
    }
    let days = active_days(tasks);
    let window_start = today - chrono::Duration::days(6);
    let recent = days
        .iter()
        .filter(|d| **d >= window_start && **d <= today)
        .count() as u32;
    (recent * 100 / weekly_goal).min(100)
}

/// Tasks whose completion instant falls on `today`.
pub fn completed_today(tasks: &[Task], today: NaiveDate) -> u32 {
    tasks
        .iter()
        .filter(|t| t.completed)
        .filter_map(|t| t.completed_at)
        .filter(|at| at.with_timezone(&Local).date_naive() == today)
        .count() as u32
}

/// Completed high-priority tasks across the whole snapshot.
pub fn high_priority_done(tasks: &[Task]) -> u32 {
    tasks
        .iter()
        .filter(|t| t.completed && t.priority == Some(Priority::High))
        .count() as u32
}

/// Encouragement line for the current streak tier.
pub fn motivation_message(current_streak: u32) -> &'static str {
    match current_streak {
        0 => "Start your streak today",
        1 => "Great start, keep it going",
        2..=6 => "You're on fire",
        7..=13 => "Incredible dedication",
        14..=29 => "You're unstoppable",
        _ => "Legendary streak",
    }
}

/// Narrow persistence contract for the streak record.
pub trait StreakStore {
    /// Stored state, or `None` when missing or unreadable.
    fn load(&self) -> Option<StreakState>;
    fn save(&mut self, state: &StreakState) -> Result<()>;
}

/// In-memory store for tests and embedders without a data directory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStreakStore {
    state: Option<StreakState>,
}

impl MemoryStreakStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StreakStore for MemoryStreakStore {
    fn load(&self) -> Option<StreakState> {
        self.state.clone()
    }

    fn save(&mut self, state: &StreakState) -> Result<()> {
        self.state = Some(state.clone());
        Ok(())
    }
}

/// Orchestrates the load, recompute, save cycle over a [`StreakStore`].
#[derive(Debug)]
pub struct StreakTracker<S: StreakStore> {
    store: S,
}

impl<S: StreakStore> StreakTracker<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current persisted state; defaults when nothing is stored yet.
    pub fn current(&self) -> StreakState {
        self.store.load().unwrap_or_default()
    }

    /// Reconcile the snapshot and persist the result.
    pub fn refresh(&mut self, tasks: &[Task], today: NaiveDate) -> Result<StreakState> {
        let prev = self.current();
        let next = recompute(tasks, today, &prev);
        self.store.save(&next)?;
        Ok(next)
    }

    /// Update only the goal fields, leaving computed ones alone.
    pub fn set_goals(&mut self, weekly: Option<u32>, monthly: Option<u32>) -> Result<StreakState> {
        let mut state = self.current();
        if let Some(goal) = weekly {
            state.weekly_goal = goal;
        }
        if let Some(goal) = monthly {
            state.monthly_goal = goal;
        }
        self.store.save(&state)?;
        Ok(state)
    }
}
