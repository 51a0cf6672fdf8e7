//! JSON persistence over a host key-value store.
//!
//! [`PersistentStore`] reads and writes typed values under string keys and
//! turns host failures into [`StorageError`]s. [`PersistentValue`] keeps an
//! in-memory mirror of one key together with the latest storage error, so
//! a failed write never loses the caller's intended state.

mod error;
mod persistent;

pub use error::{StorageError, classify_write_failure};
pub use persistent::{Loaded, PersistentStore, PersistentValue};
