//! Storage error reporting and host failure classification.

use crate::schedule::ports::{KeyValueError, KeyValueErrorCode};
use thiserror::Error;

/// Storage problems surfaced to the user.
///
/// None of these is fatal: reads fall back to a default value and writes
/// keep the in-memory state. The display text is meant for a notice.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// The stored value could not be deserialized and was cleared.
    #[error("Stored data for '{key}' was corrupted and has been reset")]
    Corrupted {
        /// The key whose value was discarded.
        key: String,
    },

    /// The store could not be read or cleared.
    #[error("Storage is inaccessible: {reason}")]
    Inaccessible {
        /// Host-provided reason.
        reason: String,
    },

    /// The write exceeded the host's storage quota.
    #[error("Storage quota exceeded. Changes are kept for this session only")]
    QuotaExceeded,

    /// The host denied write access.
    #[error("Storage access denied. Changes are kept for this session only")]
    AccessDenied,

    /// The write failed for another reason.
    #[error("Failed to save data: {reason}")]
    WriteFailed {
        /// Host-provided reason.
        reason: String,
    },
}

impl StorageError {
    /// Creates an inaccessible-store error from a host failure.
    #[must_use]
    pub fn inaccessible(err: &KeyValueError) -> Self {
        Self::Inaccessible {
            reason: err.message().to_owned(),
        }
    }
}

/// Maps a failed host write onto a [`StorageError`].
///
/// The structured [`KeyValueErrorCode`] wins when the host supplies one.
/// Without it the message is searched, case-insensitively, for "quota" and
/// then "access". Message matching is a heuristic: hosts word their errors
/// differently and an unrecognized wording lands in
/// [`StorageError::WriteFailed`].
#[must_use]
pub fn classify_write_failure(err: &KeyValueError) -> StorageError {
    match err.code() {
        Some(KeyValueErrorCode::QuotaExceeded) => StorageError::QuotaExceeded,
        Some(KeyValueErrorCode::AccessDenied) => StorageError::AccessDenied,
        None => {
            let message = err.message().to_ascii_lowercase();
            if message.contains("quota") {
                StorageError::QuotaExceeded
            } else if message.contains("access") {
                StorageError::AccessDenied
            } else {
                StorageError::WriteFailed {
                    reason: err.message().to_owned(),
                }
            }
        }
    }
}
