//! In-memory adapters for testing and ephemeral hosts.

mod key_value;

pub use key_value::InMemoryKeyValueStore;
