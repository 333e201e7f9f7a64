//! Then steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use rstest_bdd_macros::then;
use task_manager::task::domain::{Task, TaskStatus};

fn current_task(world: &TaskStatusWorld) -> Result<Task, eyre::Report> {
    let created = world
        .last_created_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task"))?;
    run_async(world.service.get_task_by_id(created.id()))
        .ok_or_else(|| eyre::eyre!("task {} is no longer stored", created.id()))
}

#[then("the status change succeeds")]
fn status_change_succeeds(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    match world.last_move_result {
        Some(true) => Ok(()),
        other => Err(eyre::eyre!("expected a successful move, got {other:?}")),
    }
}

#[then("the status change fails")]
fn status_change_fails(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    match world.last_move_result {
        Some(false) => Ok(()),
        other => Err(eyre::eyre!("expected a failed move, got {other:?}")),
    }
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = current_task(world)?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {}, found {}",
            expected.as_str(),
            task.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task is still named "{name}""#)]
fn task_is_still_named(world: &TaskStatusWorld, name: String) -> Result<(), eyre::Report> {
    let task = current_task(world)?;
    eyre::ensure!(
        task.name() == name,
        "expected name {name}, found {}",
        task.name()
    );
    Ok(())
}

#[then("no task is stored")]
fn no_task_is_stored(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        world.repository.is_empty(),
        "expected an empty store, found {} tasks",
        world.repository.len()
    );
    Ok(())
}
