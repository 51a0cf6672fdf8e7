//! Filesystem adapters backed by a capability-scoped directory.

mod key_value;

pub use key_value::DirectoryKeyValueStore;
