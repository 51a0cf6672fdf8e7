//! Day Planner: the scheduling core of a daily task planner.
//!
//! This crate provides the pieces a planner UI calls into: flexible time
//! parsing, task form validation, the task ordering rule, and a task
//! repository persisted through a fallible host key-value store.
//!
//! # Architecture
//!
//! Day Planner follows hexagonal architecture principles:
//!
//! - **Domain**: Pure scheduling logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for host storage
//! - **Adapters**: Concrete storage implementations (memory, directory)
//!
//! # Modules
//!
//! - [`schedule`]: Time parsing, validation, ordering, persistence, and the
//!   task repository

pub mod schedule;
