use crate::calendar::WorkdayCalendar;
use crate::graph::TaskDag;
use crate::task::Task;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;
use tracing::debug;

/// Recompute `start`/`end` for every non-locked task so the collection
/// satisfies the calendar and dependency invariants:
///
/// - every non-locked task starts on a workday;
/// - `end` is exactly `duration_days` workdays after `start`, the start day
///   counting as day 1 (non-positive durations are normalized to 1);
/// - a task with dependencies starts no earlier than the first workday
///   strictly after the latest dependency finish;
/// - locked tasks keep their stated dates and feed them verbatim to
///   dependents.
///
/// The pass is pure and idempotent: the input is cloned, the returned
/// collection preserves the input order, and calling it again with the same
/// calendar yields the same result. A dependency cycle degrades to a no-op
/// that returns clones of the input unchanged.
pub fn recalculate(tasks: &[Task], calendar: &WorkdayCalendar) -> Vec<Task> {
    debug!(tasks = tasks.len(), "running schedule recalculation");

    let dag = TaskDag::build(tasks);
    let order = match dag.topological_order() {
        Ok(order) => order,
        Err(cycle) => {
            debug!(task_id = cycle.task_id, "dependency cycle, schedule left untouched");
            return tasks.to_vec();
        }
    };

    let mut working: HashMap<i32, Task> = tasks
        .iter()
        .map(|task| (task.id, task.clone()))
        .collect();

    for task_id in order {
        let computed = {
            let Some(current) = working.get(&task_id) else {
                continue;
            };
            if current.locked {
                continue;
            }
            let duration = current.duration_days.max(1);
            let start = earliest_start(current, &working, calendar);
            let end = calendar.advance_by_workdays(start, duration);
            (start, end, duration)
        };

        if let Some(entry) = working.get_mut(&task_id) {
            let (start, end, duration) = computed;
            entry.start = start;
            entry.end = end;
            entry.duration_days = duration;
        }
    }

    tasks
        .iter()
        .map(|task| working.remove(&task.id).unwrap_or_else(|| task.clone()))
        .collect()
}

/// Earliest workday the task may occupy: its own start, pushed past the
/// latest dependency finish, snapped forward to a workday. Dependency ids
/// with no matching task and self-references impose no constraint.
fn earliest_start(
    task: &Task,
    working: &HashMap<i32, Task>,
    calendar: &WorkdayCalendar,
) -> NaiveDate {
    let min_start = task
        .dependencies
        .iter()
        .filter(|&&dep_id| dep_id != task.id)
        .filter_map(|dep_id| working.get(dep_id))
        .map(|dep| calendar.next_workday(dep.end + Duration::days(1)))
        .max();

    let mut start = task.start;
    if let Some(min_start) = min_start {
        if min_start > start {
            start = min_start;
        }
    }
    calendar.next_workday(start)
}
