//! Scheduled task record and its editable details.

use super::{Priority, ScheduleTime, TaskId};
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// The user-editable part of a task.
///
/// Produced by the form validator after sanitization; the repository only
/// accepts details that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDetails {
    /// Canonical time of day.
    pub time: ScheduleTime,
    /// Trimmed, non-empty title.
    pub title: String,
    /// Optional priority; `None` is kept distinct from [`Priority::Low`].
    pub priority: Option<Priority>,
}

impl TaskDetails {
    /// Creates details with no priority.
    #[must_use]
    pub fn new(time: ScheduleTime, title: impl Into<String>) -> Self {
        Self {
            time,
            title: title.into(),
            priority: None,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// A single scheduled task.
///
/// Tasks are replaced rather than edited in place: [`Task::revised`] yields
/// a new value that keeps the identifier and creation timestamp.
///
/// The serialized form is the persisted JSON object:
/// `{"id", "time", "title", "priority"?, "createdAt"}` with `createdAt` in
/// epoch milliseconds and `priority` omitted when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    time: ScheduleTime,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted canonical time.
    pub time: ScheduleTime,
    /// Persisted title.
    pub title: String,
    /// Persisted priority, if any.
    pub priority: Option<Priority>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task with a fresh identifier, stamped by `clock`.
    ///
    /// The creation time is truncated to whole milliseconds, the precision
    /// it is persisted with, so a stored task reloads unchanged.
    #[must_use]
    pub fn new(details: TaskDetails, clock: &impl Clock) -> Self {
        Self {
            id: TaskId::new(),
            time: details.time,
            title: details.title,
            priority: details.priority,
            created_at: clock.utc().trunc_subsecs(3),
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            time: data.time,
            title: data.title,
            priority: data.priority,
            created_at: data.created_at,
        }
    }

    /// Returns a copy carrying `details`, keeping identity and creation time.
    #[must_use]
    pub fn revised(&self, details: TaskDetails) -> Self {
        Self {
            id: self.id.clone(),
            time: details.time,
            title: details.title,
            priority: details.priority,
            created_at: self.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the scheduled time.
    #[must_use]
    pub const fn time(&self) -> ScheduleTime {
        self.time
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the priority, if one was set.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
