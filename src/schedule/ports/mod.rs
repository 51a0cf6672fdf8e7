//! Port contracts for the scheduling core.
//!
//! Ports define infrastructure-agnostic interfaces the core depends on.

pub mod key_value;

pub use key_value::{KeyValueError, KeyValueErrorCode, KeyValueResult, KeyValueStore};
