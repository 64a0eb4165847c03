use chrono::NaiveDate;

use crate::ops::store::TaskStore;
use crate::util::dates::{add_days, at_local_midnight, day_floor, days_between};

/// Shift a task so it starts on `drop_day`, preserving its calendar-day
/// span exactly. An unknown task id is a silent no-op.
pub fn relocate(store: &mut TaskStore, task_id: &str, drop_day: NaiveDate) {
    let Some(task) = store.get(task_id) else {
        return;
    };
    let duration = days_between(day_floor(task.end), day_floor(task.start));
    let mut moved = task.clone();
    moved.start = at_local_midnight(drop_day);
    moved.end = at_local_midnight(add_days(drop_day, duration));
    store.add_or_update(moved);
}
