//! Shared helpers for in-memory scheduling integration tests.

use dayplanner::schedule::{
    adapters::memory::InMemoryKeyValueStore, config::DEFAULT_STORAGE_KEY, domain::Task,
    services::TaskRepository,
};
use mockable::DefaultClock;
use rstest::fixture;
use std::sync::Arc;

/// Repository type used across integration tests.
pub type TestRepository = TaskRepository<InMemoryKeyValueStore, DefaultClock>;

/// Provides a fresh, unbounded in-memory store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryKeyValueStore> {
    Arc::new(InMemoryKeyValueStore::new())
}

/// Opens a repository over `store` with the default configuration.
pub fn open_repository(store: &Arc<InMemoryKeyValueStore>) -> TestRepository {
    TaskRepository::new(Arc::clone(store), Arc::new(DefaultClock))
}

/// Decodes the persisted task list from `store`.
///
/// # Errors
///
/// Returns an error when nothing is persisted or the payload is not a task
/// list.
pub fn persisted_tasks(store: &InMemoryKeyValueStore) -> Result<Vec<Task>, eyre::Report> {
    let raw = store
        .raw(DEFAULT_STORAGE_KEY)
        .ok_or_else(|| eyre::eyre!("no task list persisted under {DEFAULT_STORAGE_KEY}"))?;
    Ok(serde_json::from_str(&raw)?)
}

/// Returns the canonical times of `tasks`, in order.
pub fn times_of(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|task| task.time().to_string()).collect()
}
