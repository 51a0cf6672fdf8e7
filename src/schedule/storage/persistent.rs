//! Typed reads and writes over a [`KeyValueStore`].

use super::{StorageError, classify_write_failure};
use crate::schedule::ports::KeyValueStore;
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::{debug, warn};

/// A value read from storage together with any problem met on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Loaded<T> {
    /// The stored value, or the caller's default.
    pub value: T,
    /// The storage problem that forced the default, if any.
    pub error: Option<StorageError>,
}

/// Reads and writes JSON-encoded values in a host key-value store.
#[derive(Debug)]
pub struct PersistentStore<S> {
    store: Arc<S>,
}

impl<S> Clone for PersistentStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: KeyValueStore> PersistentStore<S> {
    /// Creates a persistent store over `store`.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Returns the underlying host store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Reads the value at `key`, falling back to `default`.
    ///
    /// A missing key yields `default` with no error. A value that does not
    /// deserialize is removed from the store and reported as
    /// [`StorageError::Corrupted`]; if the store cannot be read or the
    /// removal fails, [`StorageError::Inaccessible`] is reported instead.
    pub fn read<T: DeserializeOwned>(&self, key: &str, default: T) -> Loaded<T> {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                return Loaded {
                    value: default,
                    error: None,
                };
            }
            Err(err) => {
                warn!(key, error = %err, "storage read failed, using default value");
                return Loaded {
                    value: default,
                    error: Some(StorageError::inaccessible(&err)),
                };
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Loaded { value, error: None },
            Err(parse_err) => {
                warn!(key, error = %parse_err, "stored value is corrupt, resetting");
                let error = match self.store.remove(key) {
                    Ok(()) => StorageError::Corrupted {
                        key: key.to_owned(),
                    },
                    Err(err) => {
                        warn!(key, error = %err, "failed to clear corrupt value");
                        StorageError::inaccessible(&err)
                    }
                };
                Loaded {
                    value: default,
                    error: Some(error),
                }
            }
        }
    }

    /// Serializes `value` and stores it at `key`.
    ///
    /// # Errors
    ///
    /// Returns the classified [`StorageError`] when serialization or the
    /// host write fails.
    pub fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let serialized = serde_json::to_string(value).map_err(|err| StorageError::WriteFailed {
            reason: err.to_string(),
        })?;
        self.store.set(key, &serialized).map_err(|err| {
            let classified = classify_write_failure(&err);
            warn!(key, error = %err, kind = %classified, "storage write failed");
            classified
        })
    }
}

/// In-memory mirror of one stored value plus the latest storage error.
///
/// Mutations always apply to the mirror first and are then written
/// through. A failed write leaves the mirror updated and records the error;
/// the next successful read or write clears it.
#[derive(Debug)]
pub struct PersistentValue<T, S> {
    backend: PersistentStore<S>,
    key: String,
    value: T,
    error: Option<StorageError>,
}

impl<T, S> PersistentValue<T, S>
where
    T: Serialize + DeserializeOwned,
    S: KeyValueStore,
{
    /// Loads the value at `key`, falling back to `default`.
    ///
    /// Any problem met while loading is kept as the current error.
    #[must_use]
    pub fn load(backend: PersistentStore<S>, key: impl Into<String>, default: T) -> Self {
        let storage_key = key.into();
        let Loaded { value, error } = backend.read(&storage_key, default);
        Self {
            backend,
            key: storage_key,
            value,
            error,
        }
    }

    /// Returns the storage key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the current in-memory value.
    #[must_use]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Returns the latest storage error, if the last operation failed.
    #[must_use]
    pub const fn error(&self) -> Option<&StorageError> {
        self.error.as_ref()
    }

    /// Forgets the current error without touching storage.
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Replaces the in-memory value without writing it through.
    pub fn replace_in_memory(&mut self, value: T) {
        self.value = value;
    }

    /// Replaces the value and writes it through.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from the write; the new value is kept in
    /// memory regardless.
    pub fn set(&mut self, value: T) -> Result<(), StorageError> {
        self.value = value;
        self.persist()
    }

    /// Mutates the value in place and writes it through.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] from the write; the mutation is kept in
    /// memory regardless.
    pub fn update(&mut self, mutate: impl FnOnce(&mut T)) -> Result<(), StorageError> {
        mutate(&mut self.value);
        self.persist()
    }

    /// Re-reads the stored value, falling back to `default`.
    pub fn reload(&mut self, default: T) {
        let Loaded { value, error } = self.backend.read(&self.key, default);
        self.value = value;
        self.error = error;
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        match self.backend.write(&self.key, &self.value) {
            Ok(()) => {
                debug!(key = %self.key, "value persisted");
                self.error = None;
                Ok(())
            }
            Err(err) => {
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }
}
