//! In-memory key-value store implementation.

use crate::schedule::ports::{KeyValueError, KeyValueResult, KeyValueStore};
use std::collections::HashMap;
use std::sync::{
    RwLock,
    atomic::{AtomicBool, Ordering},
};

/// Process-local [`KeyValueStore`].
///
/// An optional byte quota (sum of key and value lengths) mimics the finite
/// capacity of host storage, and [`Self::set_access_denied`] makes every
/// call fail the way a locked-down host store does.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
    quota_bytes: Option<usize>,
    access_denied: AtomicBool,
}

impl InMemoryKeyValueStore {
    /// Creates an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store that rejects writes beyond `quota_bytes`.
    #[must_use]
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Creates a store pre-populated with `entries`.
    #[must_use]
    pub fn with_entries<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self {
            entries: RwLock::new(map),
            ..Self::default()
        }
    }

    /// Makes every subsequent call fail with an access-denied error.
    pub fn set_access_denied(&self, denied: bool) {
        self.access_denied.store(denied, Ordering::SeqCst);
    }

    /// Returns the raw value at `key`, bypassing the access switch.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .ok()
            .and_then(|entries| entries.get(key).cloned())
    }

    fn check_access(&self) -> KeyValueResult<()> {
        if self.access_denied.load(Ordering::SeqCst) {
            return Err(KeyValueError::access_denied(
                "access to the storage area was denied",
            ));
        }
        Ok(())
    }
}

fn used_bytes(entries: &HashMap<String, String>, skip_key: &str) -> usize {
    entries
        .iter()
        .filter(|(key, _)| key.as_str() != skip_key)
        .map(|(key, value)| key.len() + value.len())
        .sum()
}

impl KeyValueStore for InMemoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        self.check_access()?;
        let entries = self
            .entries
            .read()
            .map_err(|err| KeyValueError::other(err.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        self.check_access()?;
        let mut entries = self
            .entries
            .write()
            .map_err(|err| KeyValueError::other(err.to_string()))?;
        if let Some(quota) = self.quota_bytes {
            let required = used_bytes(&entries, key) + key.len() + value.len();
            if required > quota {
                return Err(KeyValueError::quota_exceeded(format!(
                    "setting '{key}' needs {required} bytes, exceeding the quota of {quota}"
                )));
            }
        }
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        self.check_access()?;
        let mut entries = self
            .entries
            .write()
            .map_err(|err| KeyValueError::other(err.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
