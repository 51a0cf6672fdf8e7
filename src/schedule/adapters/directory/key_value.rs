//! Directory-backed key-value store implementation.

use crate::schedule::ports::{KeyValueError, KeyValueResult, KeyValueStore};
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::ErrorKind;

/// [`KeyValueStore`] keeping one file per key inside a directory.
///
/// All access goes through a [`Dir`] capability, so keys cannot reach
/// outside the directory. Writes go to a temporary sibling first and are
/// renamed into place, so a crash never leaves a half-written value.
#[derive(Debug)]
pub struct DirectoryKeyValueStore {
    dir: Dir,
}

impl DirectoryKeyValueStore {
    /// Wraps an already opened directory capability.
    #[must_use]
    pub const fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }

    /// Opens `path`, creating it and any missing parents first.
    ///
    /// # Errors
    ///
    /// Returns [`KeyValueError`] when the directory cannot be created or
    /// opened.
    pub fn open(path: &Utf8Path) -> KeyValueResult<Self> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|err| io_error(&err))?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| io_error(&err))?;
        Ok(Self::from_dir(dir))
    }
}

/// Rejects keys that are not a single plain path segment.
fn file_name(key: &str) -> KeyValueResult<&str> {
    let is_plain = !key.is_empty()
        && key != "."
        && key != ".."
        && !key.starts_with(".tmp-")
        && !key.contains(['/', '\\']);
    if !is_plain {
        return Err(KeyValueError::access_denied(format!(
            "key '{key}' is not a valid storage file name"
        )));
    }
    Ok(key)
}

fn io_error(err: &std::io::Error) -> KeyValueError {
    match err.kind() {
        ErrorKind::PermissionDenied => KeyValueError::access_denied(err.to_string()),
        ErrorKind::StorageFull | ErrorKind::QuotaExceeded => {
            KeyValueError::quota_exceeded(err.to_string())
        }
        _ => KeyValueError::other(err.to_string()),
    }
}

impl KeyValueStore for DirectoryKeyValueStore {
    fn get(&self, key: &str) -> KeyValueResult<Option<String>> {
        match self.dir.read_to_string(file_name(key)?) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(io_error(&err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> KeyValueResult<()> {
        let target = file_name(key)?;
        let staging = format!(".tmp-{target}");
        self.dir
            .write(&staging, value)
            .map_err(|err| io_error(&err))?;
        self.dir
            .rename(&staging, &self.dir, target)
            .map_err(|err| io_error(&err))
    }

    fn remove(&self, key: &str) -> KeyValueResult<()> {
        match self.dir.remove_file(file_name(key)?) {
            Err(err) if err.kind() != ErrorKind::NotFound => Err(io_error(&err)),
            _ => Ok(()),
        }
    }
}
