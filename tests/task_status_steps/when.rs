//! When steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::when;
use task_manager::task::domain::{TaskId, TaskStatus};

fn parse_status(raw: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(raw).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

#[when(r#"the task is moved to "{status}""#)]
fn move_task(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    let task = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;

    let moved = run_async(world.service.update_task_status(task.id(), target));
    world.last_move_result = Some(moved);
    Ok(())
}

#[when(r#"an unknown task is moved to "{status}""#)]
fn move_unknown_task(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let target = parse_status(&status)?;
    let moved = run_async(world.service.update_task_status(TaskId::new(), target));
    world.last_move_result = Some(moved);
    Ok(())
}
