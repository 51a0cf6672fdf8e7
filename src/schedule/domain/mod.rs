//! Domain model for daily task scheduling.
//!
//! The schedule domain models canonical wall-clock times, task priorities,
//! and the task record itself, along with the ordering rule every observed
//! task list satisfies. Infrastructure concerns stay outside this boundary.

mod error;
mod ids;
pub mod ordering;
mod priority;
mod task;
pub mod time;

pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use ordering::{compare_tasks, is_task_list_sorted, sort_tasks, sort_tasks_in_place};
pub use priority::Priority;
pub use task::{PersistedTaskData, Task, TaskDetails};
pub use time::{
    ScheduleTime, TimeParseError, format_time_for_display, is_valid_time_format, parse_time,
};
