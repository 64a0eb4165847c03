use chrono::{DateTime, Duration, Local};

use crate::model::filters::Filters;
use crate::model::task::Task;

/// Reduce a task list to the visible subset, preserving order.
///
/// Dimensions compose by logical AND; an empty dimension restricts nothing:
/// - search: trimmed, case-insensitive substring match on the name
/// - categories: status membership when the set is non-empty
/// - horizon: with `limit = now + N weeks`, drop tasks already finished
///   (`end < now`) or starting past the horizon (`start > limit`); tasks
///   straddling either boundary are kept
pub fn visible_tasks<'a, I>(tasks: I, filters: &Filters, now: DateTime<Local>) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    let needle = filters.search.trim().to_lowercase();
    let limit = filters.time.map(|h| now + Duration::days(h.days()));

    tasks
        .into_iter()
        .filter(|task| {
            if !needle.is_empty() && !task.name.to_lowercase().contains(&needle) {
                return false;
            }
            if !filters.categories.is_empty() && !filters.categories.contains(&task.status) {
                return false;
            }
            if let Some(limit) = limit
                && (task.end < now || task.start > limit)
            {
                return false;
            }
            true
        })
        .collect()
}
