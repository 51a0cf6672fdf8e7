//! Unit tests for the scheduling core.


use crate::schedule::domain::{
    PersistedTaskData, Priority, ScheduleTime, Task, TaskId, parse_time,
};
use chrono::DateTime;

/// Builds a task with a fixed identifier and creation time.
pub(super) fn task_at(
    id: &str,
    time: &str,
    priority: Option<Priority>,
    created_at_ms: i64,
) -> Task {
    Task::from_persisted(PersistedTaskData {
        id: TaskId::parse(id).expect("valid task id"),
        time: schedule_time(time),
        title: format!("Task {id}"),
        priority,
        created_at: DateTime::from_timestamp_millis(created_at_ms).expect("valid timestamp"),
    })
}

/// Parses a time that the test knows to be valid.
pub(super) fn schedule_time(value: &str) -> ScheduleTime {
    parse_time(value).expect("valid time")
}
