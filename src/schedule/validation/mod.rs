//! Task form sanitization and validation.
//!
//! Raw form input is sanitized first and the sanitized result is what gets
//! validated: a time typed as `"  9:30 AM  "` becomes `"09:30"` and passes,
//! while a malformed time is left as typed and fails. Each field is checked
//! independently and every failing field is reported.

mod error;
mod form;
pub mod rules;
mod service;

pub use error::{FieldError, FormField, FormValidationError};
pub use form::{SanitizedFormData, TaskFormData};
pub use service::{FormValidation, TaskFormValidator, validate_and_sanitize_task_form_data};
