//! Then steps for project lifecycle BDD scenarios.

use super::world::{ProjectLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::then;
use taskboard::board::{
    domain::{Task, TaskStatus},
    ports::TaskRepository,
    services::BoardErrorKind,
};

fn expect_error_kind(
    world: &ProjectLifecycleWorld,
    expected: BoardErrorKind,
) -> Result<(), eyre::Report> {
    let err = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("expected a failed request, but none failed"))?;
    if err.kind() != expected {
        return Err(eyre::eyre!("expected {expected:?} error, got {err:?}"));
    }
    Ok(())
}

/// Reloads the scenario task from storage so assertions see persisted state.
fn stored_task(world: &ProjectLifecycleWorld) -> Result<Task, eyre::Report> {
    let task_id = world.task()?.id();
    run_async(world.repository.find_task_by_id(task_id))
        .wrap_err("reload task")?
        .ok_or_else(|| eyre::eyre!("task {task_id} is no longer stored"))
}

#[then("the board holds {count:u32} tasks")]
fn board_holds_tasks(world: &ProjectLifecycleWorld, count: u32) -> Result<(), eyre::Report> {
    let stored = run_async(world.repository.count_tasks()).wrap_err("count tasks")?;
    if stored != usize::try_from(count)? {
        return Err(eyre::eyre!("expected {count} tasks, found {stored}"));
    }
    Ok(())
}

#[then("looking up the task fails with a not found error")]
fn task_lookup_not_found(world: &ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let task_id = world.task()?.id();
    match run_async(world.tasks.get_task(project_id, task_id)) {
        Err(err) if err.kind() == BoardErrorKind::NotFound => Ok(()),
        other => Err(eyre::eyre!("expected not found, got {other:?}")),
    }
}

#[then("the request fails with a duplicate name error")]
fn fails_with_duplicate_name(world: &ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    expect_error_kind(world, BoardErrorKind::DuplicateName)
}

#[then("the request fails with a cap exceeded error")]
fn fails_with_cap_exceeded(world: &ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    expect_error_kind(world, BoardErrorKind::CapExceeded)
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &ProjectLifecycleWorld, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = stored_task(world)?;
    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected status {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"the task title is "{title}""#)]
fn task_title_is(world: &ProjectLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    if task.title().as_str() != title {
        return Err(eyre::eyre!("expected title {title}, found {}", task.title()));
    }
    Ok(())
}

#[then("{count:u32} task was closed")]
fn tasks_closed(world: &ProjectLifecycleWorld, count: u32) -> Result<(), eyre::Report> {
    let closed = world
        .closed_count
        .ok_or_else(|| eyre::eyre!("autoclose job has not run"))?;
    if closed != usize::try_from(count)? {
        return Err(eyre::eyre!("expected {count} closed tasks, got {closed}"));
    }
    Ok(())
}

#[then("the task has a closed timestamp")]
fn task_has_closed_timestamp(world: &ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    let task = stored_task(world)?;
    if task.closed_at().is_none() {
        return Err(eyre::eyre!("task {} has no closed timestamp", task.id()));
    }
    Ok(())
}
