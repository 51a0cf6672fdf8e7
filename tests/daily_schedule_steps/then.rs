//! Then steps for daily schedule BDD scenarios.

use super::world::ScheduleWorld;
use dayplanner::schedule::{config::DEFAULT_STORAGE_KEY, services::TaskRepositoryError};
use rstest_bdd_macros::then;

#[then(r#"the schedule times are "{times}""#)]
fn schedule_times_are(world: &ScheduleWorld, times: String) -> Result<(), eyre::Report> {
    let expected: Vec<&str> = times.split(", ").collect();
    let actual: Vec<String> = world
        .repository()?
        .tasks()
        .iter()
        .map(|task| task.time().to_string())
        .collect();

    if actual != expected {
        return Err(eyre::eyre!("expected times {expected:?}, found {actual:?}"));
    }
    Ok(())
}

#[then("the addition fails with {count:usize} validation errors")]
fn addition_fails_with_errors(world: &ScheduleWorld, count: usize) -> Result<(), eyre::Report> {
    let result = world
        .last_add_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing add result in scenario world"))?;

    match result {
        Err(TaskRepositoryError::Validation(err)) if err.errors().len() == count => Ok(()),
        other => Err(eyre::eyre!(
            "expected {count} validation errors, got {other:?}"
        )),
    }
}

#[then("the edit fails because the task was not found")]
fn edit_fails_not_found(world: &ScheduleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result in scenario world"))?;

    if !matches!(result, Err(TaskRepositoryError::NotFound(_))) {
        return Err(eyre::eyre!("expected not-found error, got {result:?}"));
    }
    Ok(())
}

#[then("the schedule has {count:usize} task")]
fn schedule_has_tasks(world: &ScheduleWorld, count: usize) -> Result<(), eyre::Report> {
    let len = world.repository()?.len();
    if len != count {
        return Err(eyre::eyre!("expected {count} tasks, found {len}"));
    }
    Ok(())
}

#[then("the schedule is empty")]
fn schedule_is_empty(world: &ScheduleWorld) -> Result<(), eyre::Report> {
    let repository = world.repository()?;
    if !repository.is_empty() {
        return Err(eyre::eyre!(
            "expected an empty schedule, found {:?}",
            repository.tasks()
        ));
    }
    Ok(())
}

#[then("the stored task list is empty")]
fn stored_list_is_empty(world: &ScheduleWorld) -> Result<(), eyre::Report> {
    let raw = world.store.raw(DEFAULT_STORAGE_KEY);
    if raw.as_deref() != Some("[]") {
        return Err(eyre::eyre!("expected an empty stored list, found {raw:?}"));
    }
    Ok(())
}

#[then(r#"a storage notice mentions "{fragment}""#)]
fn storage_notice_mentions(world: &ScheduleWorld, fragment: String) -> Result<(), eyre::Report> {
    let notice = world
        .repository()?
        .error()
        .map(ToString::to_string)
        .ok_or_else(|| eyre::eyre!("expected a storage notice, found none"))?;

    if !notice.to_lowercase().contains(&fragment.to_lowercase()) {
        return Err(eyre::eyre!(
            "expected notice mentioning {fragment:?}, found {notice:?}"
        ));
    }
    Ok(())
}
