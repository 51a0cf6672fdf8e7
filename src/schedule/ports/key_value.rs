//! Port for the host's synchronous string key-value storage.

use std::fmt;
use thiserror::Error;

/// Result type for key-value store operations.
pub type KeyValueResult<T> = Result<T, KeyValueError>;

/// Synchronous string-keyed, string-valued storage with a finite quota.
///
/// Every call completes or fails immediately; there is no cross-process
/// coordination, so concurrent writers to the same key resolve as last
/// write wins.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored at `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the store cannot be read.
    fn get(&self, key: &str) -> KeyValueResult<Option<String>>;

    /// Stores `value` at `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the write is rejected, for example
    /// because the quota is exhausted.
    fn set(&self, key: &str, value: &str) -> KeyValueResult<()>;

    /// Removes `key`; removing an absent key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the store cannot be modified.
    fn remove(&self, key: &str) -> KeyValueResult<()>;
}

/// Structured failure signal reported by a host store, when it has one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyValueErrorCode {
    /// The store's size quota would be exceeded.
    QuotaExceeded,
    /// The host refused access to the store.
    AccessDenied,
}

impl fmt::Display for KeyValueErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::QuotaExceeded => f.write_str("quota_exceeded"),
            Self::AccessDenied => f.write_str("access_denied"),
        }
    }
}

/// Failure raised by a [`KeyValueStore`] implementation.
///
/// Hosts that expose a structured error signal set [`Self::code`]; others
/// only provide a message.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct KeyValueError {
    code: Option<KeyValueErrorCode>,
    message: String,
}

impl KeyValueError {
    /// Creates an error carrying only a host message.
    #[must_use]
    pub fn other(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    /// Creates an error carrying a structured code.
    #[must_use]
    pub fn with_code(code: KeyValueErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }

    /// Creates a quota-exceeded error.
    #[must_use]
    pub fn quota_exceeded(message: impl Into<String>) -> Self {
        Self::with_code(KeyValueErrorCode::QuotaExceeded, message)
    }

    /// Creates an access-denied error.
    #[must_use]
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::with_code(KeyValueErrorCode::AccessDenied, message)
    }

    /// Returns the structured code, if the host supplied one.
    #[must_use]
    pub const fn code(&self) -> Option<KeyValueErrorCode> {
        self.code
    }

    /// Returns the host message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
