//! Task priority levels.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority attached to a scheduled task.
///
/// Ordering between tasks that share a time uses [`Priority::weight`],
/// highest first. A task without a priority orders like [`Priority::Low`]
/// but is stored without one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal importance.
    Medium,
    /// Must not slip.
    High,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Returns the ordering weight, larger meaning more important.
    #[must_use]
    pub const fn weight(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Returns the ordering weight of an optional priority.
    ///
    /// A missing priority weighs the same as [`Priority::Low`].
    #[must_use]
    pub const fn weight_of(priority: Option<Self>) -> u8 {
        match priority {
            Some(value) => value.weight(),
            None => Self::Low.weight(),
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    /// Parses the exact lowercase storage names; matching is case-sensitive.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
