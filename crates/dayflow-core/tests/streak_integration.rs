//! Integration tests for streak tracking: the full load, recompute,
//! save cycle against both the in-memory and the JSON store.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use dayflow_core::{
    weekly_progress, JsonStreakStore, MemoryStreakStore, StreakState, StreakTracker, Task,
};

fn local_utc(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    Local
        .from_local_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

fn completed_on(dates: &[NaiveDate]) -> Vec<Task> {
    dates
        .iter()
        .map(|d| {
            let mut t = Task::new("t");
            t.created_at = local_utc(*d, 8);
            t.complete_at(local_utc(*d, 9));
            t
        })
        .collect()
}

#[test]
fn test_refresh_workflow_builds_streak() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let tasks = completed_on(&[today, today - Duration::days(1)]);

    let mut tracker = StreakTracker::new(MemoryStreakStore::new());
    let state = tracker.refresh(&tasks, today).unwrap();

    assert_eq!(state.current_streak, 2);
    assert_eq!(state.longest_streak, 2);
    assert_eq!(state.total_days_active, 2);
    assert_eq!(state.last_active_date, Some(today));
    // Two active days against the default goal of five.
    assert_eq!(weekly_progress(&tasks, today, state.weekly_goal), 40);
}

#[test]
fn test_longest_streak_survives_snapshot_shrink() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let mut tracker = StreakTracker::new(MemoryStreakStore::new());

    let full = completed_on(&[
        today,
        today - Duration::days(1),
        today - Duration::days(2),
    ]);
    let state = tracker.refresh(&full, today).unwrap();
    assert_eq!(state.longest_streak, 3);

    // Most tasks deleted; only a stale completion remains.
    let shrunk = completed_on(&[today - Duration::days(9)]);
    let state = tracker.refresh(&shrunk, today).unwrap();
    assert_eq!(state.current_streak, 0);
    assert_eq!(state.total_days_active, 1);
    assert_eq!(state.longest_streak, 3);
}

#[test]
fn test_goals_survive_refresh() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    let mut tracker = StreakTracker::new(MemoryStreakStore::new());

    tracker.set_goals(Some(3), Some(12)).unwrap();
    let state = tracker.refresh(&completed_on(&[today]), today).unwrap();

    assert_eq!(state.weekly_goal, 3);
    assert_eq!(state.monthly_goal, 12);
    assert_eq!(state.current_streak, 1);
}

#[test]
fn test_json_store_roundtrip_through_tracker() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("streak.json");
    let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();

    let refreshed = {
        let mut tracker = StreakTracker::new(JsonStreakStore::with_path(&path));
        tracker
            .refresh(&completed_on(&[today, today - Duration::days(1)]), today)
            .unwrap()
    };

    let tracker = StreakTracker::new(JsonStreakStore::with_path(&path));
    assert_eq!(tracker.current(), refreshed);
}

#[test]
fn test_corrupt_streak_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("streak.json");
    std::fs::write(&path, "{not valid json").unwrap();

    let tracker = StreakTracker::new(JsonStreakStore::with_path(&path));
    assert_eq!(tracker.current(), StreakState::default());
    assert_eq!(tracker.current().weekly_goal, 5);
    assert_eq!(tracker.current().monthly_goal, 20);
}
