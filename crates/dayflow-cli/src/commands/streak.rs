//! Streak commands: show, reconcile, and configure the completion streak.

use chrono::Local;
use clap::Subcommand;
use dayflow_core::{
    completed_today, high_priority_done, motivation_message, weekly_progress, JsonStreakStore,
    StreakState, StreakTracker, TaskStore,
};
use serde::Serialize;

#[derive(Subcommand)]
pub enum StreakAction {
    /// Show the persisted streak state
    Show {
        /// Override the streak file path
        #[arg(long)]
        store: Option<String>,
    },
    /// Reconcile the streak against the current tasks
    Refresh {
        /// Override the streak file path
        #[arg(long)]
        store: Option<String>,
        /// Override the tasks file path
        #[arg(long)]
        tasks: Option<String>,
    },
    /// Update weekly and monthly goals
    Goals {
        /// Active days per week to aim for
        #[arg(long)]
        weekly: Option<u32>,
        /// Active days per month to aim for
        #[arg(long)]
        monthly: Option<u32>,
        /// Override the streak file path
        #[arg(long)]
        store: Option<String>,
    },
}

#[derive(Serialize)]
struct StreakReport {
    state: StreakState,
    weekly_progress: u32,
    completed_today: u32,
    high_priority_done: u32,
    message: &'static str,
}

pub fn run(action: StreakAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        StreakAction::Show { store } => {
            let tracker = StreakTracker::new(open_store(store)?);
            println!("{}", serde_json::to_string_pretty(&tracker.current())?);
        }
        StreakAction::Refresh { store, tasks } => {
            let task_store = match tasks {
                Some(p) => TaskStore::with_path(p),
                None => TaskStore::open()?,
            };
            let snapshot = task_store.load();
            let today = Local::now().date_naive();

            let mut tracker = StreakTracker::new(open_store(store)?);
            let state = tracker.refresh(&snapshot, today)?;

            let report = StreakReport {
                weekly_progress: weekly_progress(&snapshot, today, state.weekly_goal),
                completed_today: completed_today(&snapshot, today),
                high_priority_done: high_priority_done(&snapshot),
                message: motivation_message(state.current_streak),
                state,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        StreakAction::Goals {
            weekly,
            monthly,
            store,
        } => {
            let mut tracker = StreakTracker::new(open_store(store)?);
            let state = tracker.set_goals(weekly, monthly)?;
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
    }
    Ok(())
}

fn open_store(path: Option<String>) -> Result<JsonStreakStore, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(p) => JsonStreakStore::with_path(p),
        None => JsonStreakStore::open()?,
    })
}
