//! End-to-end task lifecycle flows against the in-memory store.

use super::helpers::{TestRepository, open_repository, persisted_tasks, store, times_of};
use dayplanner::schedule::{
    adapters::memory::InMemoryKeyValueStore,
    domain::{Priority, format_time_for_display, is_task_list_sorted},
    services::TaskRepositoryError,
    validation::TaskFormData,
};
use rstest::rstest;
use std::sync::Arc;

fn plan_day(repository: &mut TestRepository) -> Result<(), eyre::Report> {
    let entries = [
        ("2:30 PM", "Dentist", Some("high")),
        ("08:00", "Gym", None),
        ("8:00 am", "Pack lunch", Some("medium")),
        ("12:00 PM", "Lunch with Sam", Some("low")),
    ];
    for (time, title, priority) in entries {
        let form = match priority {
            Some(name) => TaskFormData::new(time, title).with_priority(name),
            None => TaskFormData::new(time, title),
        };
        repository.add(&form)?;
    }
    Ok(())
}

#[rstest]
fn planned_day_is_sorted_in_memory_and_in_storage(
    store: Arc<InMemoryKeyValueStore>,
) -> Result<(), eyre::Report> {
    let mut repository = open_repository(&store);
    plan_day(&mut repository)?;

    let titles: Vec<&str> = repository.tasks().iter().map(|task| task.title()).collect();
    eyre::ensure!(
        titles == ["Pack lunch", "Gym", "Lunch with Sam", "Dentist"],
        "unexpected order: {titles:?}"
    );

    let persisted = persisted_tasks(&store)?;
    eyre::ensure!(persisted == repository.tasks(), "storage diverged from memory");
    eyre::ensure!(is_task_list_sorted(&persisted), "persisted list is unsorted");
    Ok(())
}

#[rstest]
fn reopening_restores_the_same_schedule(
    store: Arc<InMemoryKeyValueStore>,
) -> Result<(), eyre::Report> {
    let mut repository = open_repository(&store);
    plan_day(&mut repository)?;

    let reopened = open_repository(&store);

    eyre::ensure!(reopened.tasks() == repository.tasks(), "reopened list differs");
    eyre::ensure!(reopened.error().is_none(), "unexpected storage error");
    Ok(())
}

#[rstest]
fn edit_moves_task_and_keeps_identity(
    store: Arc<InMemoryKeyValueStore>,
) -> Result<(), eyre::Report> {
    let mut repository = open_repository(&store);
    plan_day(&mut repository)?;
    let gym = repository
        .tasks()
        .iter()
        .find(|task| task.title() == "Gym")
        .cloned()
        .ok_or_else(|| eyre::eyre!("gym task missing"))?;

    let moved = repository.update(
        gym.id(),
        &TaskFormData::new("6:15 PM", "Gym").with_priority("high"),
    )?;

    eyre::ensure!(moved.id() == gym.id(), "identifier changed");
    eyre::ensure!(moved.created_at() == gym.created_at(), "creation time changed");
    eyre::ensure!(moved.priority() == Some(Priority::High), "priority not applied");
    eyre::ensure!(
        times_of(repository.tasks()) == ["08:00", "12:00", "14:30", "18:15"],
        "unexpected times: {:?}",
        times_of(repository.tasks())
    );
    eyre::ensure!(
        format_time_for_display(&moved.time().to_string()) == "6:15 PM",
        "display form mismatch"
    );
    eyre::ensure!(
        persisted_tasks(&store)? == repository.tasks(),
        "storage diverged from memory"
    );
    Ok(())
}

#[rstest]
fn delete_then_clear_leaves_an_empty_persisted_list(
    store: Arc<InMemoryKeyValueStore>,
) -> Result<(), eyre::Report> {
    let mut repository = open_repository(&store);
    plan_day(&mut repository)?;
    let first_id = repository
        .tasks()
        .first()
        .map(|task| task.id().clone())
        .ok_or_else(|| eyre::eyre!("schedule is empty"))?;

    repository.delete(&first_id)?;
    eyre::ensure!(repository.len() == 3, "delete did not remove exactly one task");
    eyre::ensure!(
        matches!(
            repository.delete(&first_id),
            Err(TaskRepositoryError::NotFound(_))
        ),
        "second delete should report not found"
    );

    repository.clear_all();
    eyre::ensure!(repository.is_empty(), "clear_all left tasks behind");
    eyre::ensure!(persisted_tasks(&store)?.is_empty(), "storage not cleared");
    Ok(())
}
