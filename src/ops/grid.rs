use chrono::{Datelike, Months, NaiveDate};

use crate::model::config::WeekStart;
use crate::model::task::Task;
use crate::util::dates::{add_days, day_floor};

/// True iff `day` falls within the task's inclusive day-floored range.
pub fn is_task_on_day(day: NaiveDate, task: &Task) -> bool {
    let start = day_floor(task.start);
    let end = day_floor(task.end);
    day >= start && day <= end
}

/// The subset of `tasks` occupying `day`, in list order.
pub fn tasks_on_day<'a, I>(day: NaiveDate, tasks: I) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    tasks
        .into_iter()
        .filter(|t| is_task_on_day(day, t))
        .collect()
}

/// First day of the month containing `day`.
pub fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

/// Last day of the month containing `day`.
pub fn last_of_month(day: NaiveDate) -> NaiveDate {
    add_days(next_month(first_of_month(day)), -1)
}

/// First day of the following month.
pub fn next_month(month_first: NaiveDate) -> NaiveDate {
    month_first
        .checked_add_months(Months::new(1))
        .unwrap_or(month_first)
}

/// First day of the preceding month.
pub fn prev_month(month_first: NaiveDate) -> NaiveDate {
    month_first
        .checked_sub_months(Months::new(1))
        .unwrap_or(month_first)
}

/// The month grid for the month containing `day`: every displayed week in
/// rows of 7, padded at both ends to full weeks.
pub fn month_grid(day: NaiveDate, week_start: WeekStart) -> Vec<[NaiveDate; 7]> {
    let first = first_of_month(day);
    let last = last_of_month(day);
    let grid_start = add_days(first, -week_start.offset_of(first));
    let grid_end = add_days(last, 6 - week_start.offset_of(last));

    let mut weeks = Vec::new();
    let mut cursor = grid_start;
    while cursor <= grid_end {
        let mut week = [cursor; 7];
        for (i, slot) in week.iter_mut().enumerate() {
            *slot = add_days(cursor, i as i64);
        }
        weeks.push(week);
        cursor = add_days(cursor, 7);
    }
    weeks
}
