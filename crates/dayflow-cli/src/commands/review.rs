//! Review commands: windowed metrics for a day or a week.

use chrono::{Local, NaiveDate, Utc};
use clap::Subcommand;
use dayflow_core::{
    compute_metrics, format_minutes, DateRange, ReviewMetrics, TaskStore, ViewMode,
};
use serde::Serialize;

#[derive(Subcommand)]
pub enum ReviewAction {
    /// Metrics for one day
    Day {
        /// Reference date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Override the tasks file path
        #[arg(long)]
        tasks: Option<String>,
    },
    /// Metrics for the week containing the date
    Week {
        /// Reference date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Override the tasks file path
        #[arg(long)]
        tasks: Option<String>,
    },
}

#[derive(Serialize)]
struct ReviewReport {
    mode: &'static str,
    range: DateRange,
    metrics: ReviewMetrics,
    time_tracked: String,
    time_estimated: String,
}

pub fn run(action: ReviewAction) -> Result<(), Box<dyn std::error::Error>> {
    let (mode, date, tasks) = match action {
        ReviewAction::Day { date, tasks } => (ViewMode::Day, date, tasks),
        ReviewAction::Week { date, tasks } => (ViewMode::Week, date, tasks),
    };

    let reference = parse_reference(date)?;
    let store = match tasks {
        Some(p) => TaskStore::with_path(p),
        None => TaskStore::open()?,
    };
    let snapshot = store.load();

    let range = DateRange::resolve(reference, mode);
    let metrics = compute_metrics(&snapshot, &range, Utc::now());
    let report = ReviewReport {
        mode: mode.as_str(),
        time_tracked: format_minutes(metrics.total_time_tracked_minutes),
        time_estimated: format_minutes(metrics.total_time_estimated_minutes),
        range,
        metrics,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn parse_reference(date: Option<String>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match date {
        Some(d) => NaiveDate::parse_from_str(&d, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{d}', expected YYYY-MM-DD").into()),
        None => Ok(Local::now().date_naive()),
    }
}
