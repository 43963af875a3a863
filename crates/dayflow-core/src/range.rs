//! Calendar range resolution for review views.
//!
//! A range is a local-time calendar window, either a single day or a
//! Sunday-start week. Bounds are inclusive at both ends; membership tests
//! convert UTC instants to local wall-clock time first.

use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Review window granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Day,
    Week,
}

impl ViewMode {
    /// Days moved by one navigation step.
    pub fn step_days(&self) -> i64 {
        match self {
            ViewMode::Day => 1,
            ViewMode::Week => 7,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
        }
    }
}

/// Direction for shifting a reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

/// A resolved calendar window with inclusive bounds and a display label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    /// First instant of the window, local wall-clock
    pub start: NaiveDateTime,
    /// Last instant of the window, local wall-clock
    pub end: NaiveDateTime,
    /// Display label, e.g. "Wednesday, Jan 10" or "Week of Jan 7"
    pub label: String,
}

impl DateRange {
    /// Resolve the window containing `reference` for the given mode.
    ///
    /// Day windows span the full local calendar day regardless of
    /// time-of-day on the reference. Week windows span the seven days of
    /// the Sunday-start week containing the reference; the week-start
    /// convention is fixed, not configurable.
    pub fn resolve(reference: NaiveDate, mode: ViewMode) -> DateRange {
        match mode {
            ViewMode::Day => {
                let (start, end) = day_bounds(reference);
                DateRange {
                    start,
                    end,
                    label: reference.format("%A, %b %-d").to_string(),
                }
            }
            ViewMode::Week => {
                let offset = reference.weekday().num_days_from_sunday() as i64;
                let week_start = reference - Duration::days(offset);
                let week_end = week_start + Duration::days(6);
                DateRange {
                    start: day_bounds(week_start).0,
                    end: day_bounds(week_end).1,
                    label: format!("Week of {}", week_start.format("%b %-d")),
                }
            }
        }
    }

    /// Test whether a UTC instant falls inside the window.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        let local = instant.with_timezone(&Local).naive_local();
        local >= self.start && local <= self.end
    }
}

/// Shift a reference date one step in the given direction.
///
/// One step is a day in day mode and seven days in week mode. Navigation
/// history belongs to the caller; re-resolve after shifting.
pub fn navigate(date: NaiveDate, mode: ViewMode, direction: NavDirection) -> NaiveDate {
    let step = Duration::days(mode.step_days());
    match direction {
        NavDirection::Prev => date - step,
        NavDirection::Next => date + step,
    }
}

/// Inclusive bounds of one local calendar day, millisecond resolution.
fn day_bounds(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = date.and_time(NaiveTime::MIN);
    let end = start + Duration::days(1) - Duration::milliseconds(1);
    (start, end)
}
