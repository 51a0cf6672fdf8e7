//! Daily task scheduling for Day Planner.
//!
//! This module owns the scheduling core: parsing free-form time input into
//! canonical `HH:MM` values, validating task form input, keeping the task
//! list in its total order, and persisting that list through a fallible
//! host key-value store. It follows hexagonal architecture:
//!
//! - Domain types and the ordering rule in [`domain`]
//! - Form sanitization and validation in [`validation`]
//! - Port contracts for host storage in [`ports`]
//! - Host storage adapters in [`adapters`]
//! - JSON persistence with error reporting in [`storage`]
//! - The task repository in [`services`]
//!
//! Rendering, dialogs, and notifications are left to the host UI, which
//! drives a [`services::TaskRepository`] and re-renders from its snapshot.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;
pub mod storage;
pub mod validation;

#[cfg(test)]
mod tests;
