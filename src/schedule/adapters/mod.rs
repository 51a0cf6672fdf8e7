//! Host storage adapters for the scheduling core.
//!
//! # Available Adapters
//!
//! - [`memory::InMemoryKeyValueStore`]: process-local storage with optional
//!   quota and failure switches, for tests and hosts without durable storage
//! - [`directory::DirectoryKeyValueStore`]: one file per key inside a
//!   capability-scoped directory
//!
//! Both implement [`KeyValueStore`].
//!
//! [`KeyValueStore`]: crate::schedule::ports::KeyValueStore

pub mod directory;
pub mod memory;
