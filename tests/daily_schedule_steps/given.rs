//! Given steps for daily schedule BDD scenarios.

use super::world::ScheduleWorld;
use dayplanner::schedule::{
    adapters::memory::InMemoryKeyValueStore, config::DEFAULT_STORAGE_KEY, validation::TaskFormData,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use std::sync::Arc;

#[given("an empty schedule")]
fn empty_schedule(world: &mut ScheduleWorld) {
    world.open();
}

#[given(r#"a scheduled task "{title}" at "{time}""#)]
fn scheduled_task(
    world: &mut ScheduleWorld,
    title: String,
    time: String,
) -> Result<(), eyre::Report> {
    world
        .repository_mut()?
        .add(&TaskFormData::new(time, title))
        .wrap_err("schedule initial task")?;
    Ok(())
}

#[given(r#"stored task data "{raw}""#)]
fn stored_task_data(world: &mut ScheduleWorld, raw: String) {
    world.store = Arc::new(InMemoryKeyValueStore::with_entries([(DEFAULT_STORAGE_KEY, raw)]));
}

#[given("a schedule whose storage quota is {bytes:usize} bytes")]
fn schedule_with_quota(world: &mut ScheduleWorld, bytes: usize) {
    world.store = Arc::new(InMemoryKeyValueStore::with_quota(bytes));
    world.open();
}
