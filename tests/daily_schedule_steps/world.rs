//! Shared world state for daily schedule BDD scenarios.

use std::sync::Arc;

use dayplanner::schedule::{
    adapters::memory::InMemoryKeyValueStore,
    domain::Task,
    services::{TaskRepository, TaskRepositoryError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Repository type used by the BDD world.
pub type TestRepository = TaskRepository<InMemoryKeyValueStore, DefaultClock>;

/// Scenario world for daily schedule behaviour tests.
pub struct ScheduleWorld {
    /// Host store shared with the repository.
    pub store: Arc<InMemoryKeyValueStore>,
    /// Repository under test, once the schedule has been opened.
    pub repository: Option<TestRepository>,
    /// Outcome of the latest add attempt.
    pub last_add_result: Option<Result<Task, TaskRepositoryError>>,
    /// Outcome of the latest edit attempt.
    pub last_update_result: Option<Result<Task, TaskRepositoryError>>,
}

impl ScheduleWorld {
    /// Creates a world over an empty, unbounded store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryKeyValueStore::new()),
            repository: None,
            last_add_result: None,
            last_update_result: None,
        }
    }

    /// Opens the repository over the current store.
    pub fn open(&mut self) {
        self.repository = Some(TaskRepository::new(
            Arc::clone(&self.store),
            Arc::new(DefaultClock),
        ));
    }

    /// Returns the opened repository.
    ///
    /// # Errors
    ///
    /// Returns an error when no step has opened the schedule yet.
    pub fn repository(&self) -> Result<&TestRepository, eyre::Report> {
        self.repository
            .as_ref()
            .ok_or_else(|| eyre::eyre!("schedule has not been opened in this scenario"))
    }

    /// Returns the opened repository mutably.
    ///
    /// # Errors
    ///
    /// Returns an error when no step has opened the schedule yet.
    pub fn repository_mut(&mut self) -> Result<&mut TestRepository, eyre::Report> {
        self.repository
            .as_mut()
            .ok_or_else(|| eyre::eyre!("schedule has not been opened in this scenario"))
    }
}

impl Default for ScheduleWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ScheduleWorld {
    ScheduleWorld::default()
}
