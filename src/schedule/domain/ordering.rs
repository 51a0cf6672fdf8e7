//! Total order over scheduled tasks.
//!
//! Tasks sort ascending by time; ties go to the higher priority weight
//! (a missing priority weighs like `low`), and remaining ties to the task
//! created first. Sorting is stable, so fully tied tasks keep their
//! relative order.

use super::{Priority, Task};
use std::cmp::Ordering;

/// Compares two tasks by time, then priority (descending), then creation.
#[must_use]
pub fn compare_tasks(left: &Task, right: &Task) -> Ordering {
    left.time()
        .cmp(&right.time())
        .then_with(|| {
            Priority::weight_of(right.priority()).cmp(&Priority::weight_of(left.priority()))
        })
        .then_with(|| left.created_at().cmp(&right.created_at()))
}

/// Returns a sorted copy of `tasks`, leaving the input untouched.
///
/// # Examples
///
/// ```
/// use dayplanner::schedule::domain::{parse_time, sort_tasks, Task, TaskDetails};
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let tasks: Vec<Task> = ["14:00", "09:00", "12:00"]
///     .into_iter()
///     .filter_map(|time| parse_time(time).ok())
///     .map(|time| Task::new(TaskDetails::new(time, "Block"), &clock))
///     .collect();
///
/// let times: Vec<String> = sort_tasks(&tasks)
///     .iter()
///     .map(|task| task.time().to_string())
///     .collect();
/// assert_eq!(times, ["09:00", "12:00", "14:00"]);
/// ```
#[must_use]
pub fn sort_tasks(tasks: &[Task]) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sort_tasks_in_place(&mut sorted);
    sorted
}

/// Sorts `tasks` in place using the same stable order as [`sort_tasks`].
pub fn sort_tasks_in_place(tasks: &mut [Task]) {
    tasks.sort_by(compare_tasks);
}

/// Returns `true` when every adjacent pair is already in order.
#[must_use]
pub fn is_task_list_sorted(tasks: &[Task]) -> bool {
    tasks.windows(2).all(|pair| match pair {
        [left, right] => compare_tasks(left, right) != Ordering::Greater,
        _ => true,
    })
}
