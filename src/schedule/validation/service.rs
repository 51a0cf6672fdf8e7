//! Form validator combining the individual field rules.

use super::{FieldError, FormValidationError, SanitizedFormData, TaskFormData, rules};
use crate::schedule::{
    config::{DEFAULT_MAX_TITLE_LENGTH, PlannerConfig},
    domain::TaskDetails,
};

/// Outcome of sanitizing and validating one form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormValidation {
    sanitized: SanitizedFormData,
    details: Option<TaskDetails>,
    errors: Vec<FieldError>,
}

impl FormValidation {
    /// Returns the sanitized form data that was validated.
    #[must_use]
    pub const fn sanitized(&self) -> &SanitizedFormData {
        &self.sanitized
    }

    /// Returns every field error found, in field order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns `true` when no field failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Converts the outcome into typed task details.
    ///
    /// # Errors
    ///
    /// Returns a [`FormValidationError`] carrying every field error when the
    /// form was invalid.
    pub fn into_details(self) -> Result<TaskDetails, FormValidationError> {
        match self.details {
            Some(details) if self.errors.is_empty() => Ok(details),
            _ => Err(FormValidationError::new(self.errors)),
        }
    }
}

/// Sanitizes and validates task form input.
///
/// # Examples
///
/// ```
/// use dayplanner::schedule::validation::{TaskFormData, TaskFormValidator};
///
/// let validator = TaskFormValidator::new();
/// let outcome = validator.validate_and_sanitize(&TaskFormData::new("  9:30 AM  ", " Standup "));
///
/// assert!(outcome.is_valid());
/// assert_eq!(outcome.sanitized().time.as_deref(), Some("09:30"));
/// assert_eq!(outcome.sanitized().title.as_deref(), Some("Standup"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskFormValidator {
    max_title_length: usize,
}

impl TaskFormValidator {
    /// Creates a validator with the default title limit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
        }
    }

    /// Creates a validator using the limits in `config`.
    #[must_use]
    pub const fn from_config(config: &PlannerConfig) -> Self {
        Self {
            max_title_length: config.max_title_length,
        }
    }

    /// Returns the maximum title length in characters.
    #[must_use]
    pub const fn max_title_length(&self) -> usize {
        self.max_title_length
    }

    /// Sanitizes `form`, then validates the sanitized values.
    ///
    /// Every field is checked; all failures are reported together.
    #[must_use]
    pub fn validate_and_sanitize(&self, form: &TaskFormData) -> FormValidation {
        let sanitized = sanitize(form);

        let checked = (
            rules::validate_time(sanitized.time.as_deref()),
            rules::validate_title(sanitized.title.as_deref(), self.max_title_length),
            rules::validate_priority(sanitized.priority.as_deref()),
        );

        match checked {
            (Ok(time), Ok(title), Ok(priority)) => FormValidation {
                sanitized,
                details: Some(TaskDetails {
                    time,
                    title,
                    priority,
                }),
                errors: Vec::new(),
            },
            (time, title, priority) => FormValidation {
                sanitized,
                details: None,
                errors: [time.err(), title.err(), priority.err()]
                    .into_iter()
                    .flatten()
                    .collect(),
            },
        }
    }
}

impl Default for TaskFormValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sanitizes and validates `form` with the default limits.
#[must_use]
pub fn validate_and_sanitize_task_form_data(form: &TaskFormData) -> FormValidation {
    TaskFormValidator::new().validate_and_sanitize(form)
}

fn sanitize(form: &TaskFormData) -> SanitizedFormData {
    SanitizedFormData {
        time: rules::sanitize_time(form.time.as_deref()),
        title: rules::sanitize_title(form.title.as_deref()),
        priority: rules::sanitize_priority(form.priority.as_deref()),
    }
}
