//! When steps for daily schedule BDD scenarios.

use super::world::ScheduleWorld;
use dayplanner::schedule::{domain::TaskId, validation::TaskFormData};
use rstest_bdd_macros::when;

#[when("the schedule is opened")]
fn schedule_opened(world: &mut ScheduleWorld) {
    world.open();
}

#[when(r#"the user adds "{title}" at "{time}""#)]
fn user_adds_task(
    world: &mut ScheduleWorld,
    title: String,
    time: String,
) -> Result<(), eyre::Report> {
    let result = world.repository_mut()?.add(&TaskFormData::new(time, title));
    world.last_add_result = Some(result);
    Ok(())
}

#[when(r#"the user adds an untitled task at "{time}" with priority "{priority}""#)]
fn user_adds_untitled_task(
    world: &mut ScheduleWorld,
    time: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let form = TaskFormData::new(time, "").with_priority(priority);
    let result = world.repository_mut()?.add(&form);
    world.last_add_result = Some(result);
    Ok(())
}

#[when("the user edits a missing task")]
fn user_edits_missing_task(world: &mut ScheduleWorld) -> Result<(), eyre::Report> {
    let missing = TaskId::new();
    let result = world
        .repository_mut()?
        .update(&missing, &TaskFormData::new("10:00", "Renamed"));
    world.last_update_result = Some(result);
    Ok(())
}

#[when("the user clears the schedule")]
fn user_clears_schedule(world: &mut ScheduleWorld) -> Result<(), eyre::Report> {
    world.repository_mut()?.clear_all();
    Ok(())
}
