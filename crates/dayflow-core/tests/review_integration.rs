//! Integration tests for the review pipeline: range resolution,
//! membership, and metrics together.

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};
use dayflow_core::{compute_metrics, navigate, DateRange, NavDirection, Priority, Task, ViewMode};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn local_utc(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    Local
        .from_local_datetime(&date.and_hms_opt(hour, 0, 0).unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_day_review_full_workflow() {
    let day = date(2024, 1, 10);

    // Completed this morning, flagged high.
    let mut done = Task::new("ship release notes");
    done.priority = Some(Priority::High);
    done.created_at = local_utc(day - Duration::days(2), 9);
    done.complete_at(local_utc(day, 9));

    // Due yesterday and still open: outside today's window but overdue.
    let mut late = Task::new("expense report");
    late.created_at = local_utc(day - Duration::days(5), 9);
    late.due_date = Some(local_utc(day - Duration::days(1), 17));

    let tasks = vec![done, late];
    let range = DateRange::resolve(day, ViewMode::Day);
    let metrics = compute_metrics(&tasks, &range, local_utc(day, 12));

    assert_eq!(metrics.completed_count, 1);
    assert_eq!(metrics.pending_count, 0);
    assert_eq!(metrics.overdue_count, 1);
    assert_eq!(metrics.total_in_range, 1);
    assert_eq!(metrics.productivity_score, 100);
    assert_eq!(metrics.priority_breakdown.high.completed, 1);
    assert_eq!(metrics.priority_breakdown.high.total, 1);
    assert_eq!(metrics.priority_breakdown.medium.total, 0);
}

#[test]
fn test_week_review_aggregates_multiple_days() {
    // Wednesday Jan 10, 2024; the week window is Sun Jan 7 to Sat Jan 13.
    let reference = date(2024, 1, 10);

    let mut monday_done = Task::new("plan sprint");
    monday_done.created_at = local_utc(date(2024, 1, 2), 9);
    monday_done.estimated_minutes = 30;
    monday_done.actual_minutes = 45;
    monday_done.complete_at(local_utc(date(2024, 1, 8), 10));

    let mut wednesday_done = Task::new("review pull requests");
    wednesday_done.created_at = local_utc(date(2024, 1, 9), 9);
    wednesday_done.due_date = Some(local_utc(date(2024, 1, 10), 17));
    wednesday_done.estimated_minutes = 60;
    wednesday_done.actual_minutes = 50;
    wednesday_done.complete_at(local_utc(date(2024, 1, 10), 9));

    let mut created_this_week = Task::new("draft roadmap");
    created_this_week.created_at = local_utc(date(2024, 1, 9), 14);

    let mut due_friday = Task::new("send invoices");
    due_friday.created_at = local_utc(date(2023, 12, 20), 9);
    due_friday.due_date = Some(local_utc(date(2024, 1, 12), 14));

    let mut stale = Task::new("renew domain");
    stale.created_at = local_utc(date(2023, 12, 1), 9);
    stale.due_date = Some(local_utc(date(2023, 12, 15), 9));
    stale.estimated_minutes = 999;

    let tasks = vec![
        monday_done,
        wednesday_done,
        created_this_week,
        due_friday,
        stale,
    ];
    let range = DateRange::resolve(reference, ViewMode::Week);
    let metrics = compute_metrics(&tasks, &range, local_utc(reference, 12));

    assert_eq!(metrics.total_in_range, 4);
    assert_eq!(metrics.completed_count, 2);
    assert_eq!(metrics.pending_count, 2);
    // Only the December task is past due; Friday is still ahead.
    assert_eq!(metrics.overdue_count, 1);
    assert_eq!(metrics.productivity_score, 50);
    assert_eq!(metrics.total_time_tracked_minutes, 95);
    assert_eq!(metrics.total_time_estimated_minutes, 90);
}

#[test]
fn test_completed_outside_window_is_neither_completed_nor_pending() {
    // Due Wednesday, finished Friday: a member of Wednesday's window by
    // due date, but its completion falls outside and it is not pending.
    let day = date(2024, 1, 10);
    let mut task = Task::new("late finish");
    task.created_at = local_utc(day - Duration::days(3), 9);
    task.due_date = Some(local_utc(day, 17));
    task.complete_at(local_utc(day + Duration::days(2), 9));

    let range = DateRange::resolve(day, ViewMode::Day);
    let metrics = compute_metrics(
        &[task],
        &range,
        local_utc(day + Duration::days(3), 12),
    );

    assert_eq!(metrics.total_in_range, 1);
    assert_eq!(metrics.completed_count, 0);
    assert_eq!(metrics.pending_count, 0);
    assert_eq!(metrics.productivity_score, 0);
    // The breakdown still sees the flag regardless of completion time.
    assert_eq!(metrics.priority_breakdown.medium.completed, 1);
    assert_eq!(metrics.priority_breakdown.medium.total, 1);
}

#[test]
fn test_navigation_produces_adjacent_windows() {
    let reference = date(2024, 1, 10);
    for mode in [ViewMode::Day, ViewMode::Week] {
        let current = DateRange::resolve(reference, mode);
        let next = DateRange::resolve(navigate(reference, mode, NavDirection::Next), mode);
        assert_eq!(next.start, current.end + Duration::milliseconds(1));

        let back = navigate(
            navigate(reference, mode, NavDirection::Next),
            mode,
            NavDirection::Prev,
        );
        assert_eq!(DateRange::resolve(back, mode), current);
    }
}

#[test]
fn test_metrics_serialize_with_stable_field_names() {
    let day = date(2024, 1, 10);
    let mut task = Task::new("t");
    task.created_at = local_utc(day, 8);
    task.complete_at(local_utc(day, 9));

    let range = DateRange::resolve(day, ViewMode::Day);
    let metrics = compute_metrics(&[task], &range, local_utc(day, 12));
    let json = serde_json::to_value(&metrics).unwrap();

    assert_eq!(json["completed_count"], 1);
    assert_eq!(json["productivity_score"], 100);
    assert!(json["priority_breakdown"]["medium"]["completed"].is_u64());
}
