//! Direct-manipulation edit adapter. Each gesture produces a fresh task
//! record; the caller splices it into the collection and runs a full
//! recalculation pass so dependents cascade and dates are snapped uniformly.

use crate::calendar::WorkdayCalendar;
use crate::task::Task;
use chrono::{Duration, NaiveDate};

/// Shift both handles by the same number of calendar days. Duration is
/// unchanged and no workday snapping happens here; the next recalculation
/// snaps.
pub fn move_task(task: &Task, delta_days: i64) -> Task {
    let mut moved = task.clone();
    moved.start = task.start + Duration::days(delta_days);
    moved.end = task.end + Duration::days(delta_days);
    moved
}

/// Drag the start handle, keeping the end fixed. The duration is recomputed
/// from the workdays in the new range, floored to 1. A start later than the
/// end would invert the range: the edit is rejected and the prior task
/// returned unchanged.
pub fn resize_start(task: &Task, new_start: NaiveDate, calendar: &WorkdayCalendar) -> Task {
    if new_start > task.end {
        return task.clone();
    }
    let mut resized = task.clone();
    resized.start = new_start;
    resized.duration_days = calendar.count_workdays(new_start, task.end).max(1);
    resized
}

/// Drag the end handle, keeping the start fixed. The duration is recomputed
/// from the workdays in the new range, floored to 1. An end earlier than the
/// start collapses to a one-day task ending on the start day.
pub fn resize_end(task: &Task, new_end: NaiveDate, calendar: &WorkdayCalendar) -> Task {
    let mut resized = task.clone();
    if new_end < task.start {
        resized.end = task.start;
        resized.duration_days = 1;
    } else {
        resized.end = new_end;
        resized.duration_days = calendar.count_workdays(task.start, new_end).max(1);
    }
    resized
}
