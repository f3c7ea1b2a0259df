//! When steps for project lifecycle BDD scenarios.

use super::world::{ProjectLifecycleWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::board::{domain::NewTask, services::CreateProjectRequest};

#[when("the project is deleted")]
fn project_deleted(world: &mut ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    run_async(world.projects.delete_project(project_id)).wrap_err("delete project")?;
    Ok(())
}

#[when(r#"another project named "{name}" is created"#)]
fn another_project_created(world: &mut ProjectLifecycleWorld, name: String) {
    let result = run_async(world.projects.create_project(CreateProjectRequest::new(name)));
    world.last_error = result.err();
}

#[when(r#"a task titled "{title}" is added to the project"#)]
fn task_added(world: &mut ProjectLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    match run_async(world.tasks.create_task(project_id, NewTask::new(title))) {
        Ok(task) => world.last_task = Some(task),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"the task status is changed to "{status}""#)]
fn task_status_changed(
    world: &mut ProjectLifecycleWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world.task()?;
    let (project_id, task_id) = (task.project_id(), task.id());
    let updated = run_async(world.tasks.change_status(project_id, task_id, &status))
        .wrap_err("change task status")?;
    world.last_task = Some(updated);
    Ok(())
}

#[when("the autoclose job runs")]
fn autoclose_runs(world: &mut ProjectLifecycleWorld) -> Result<(), eyre::Report> {
    let closed = run_async(world.autoclose().run_once()).wrap_err("run autoclose job")?;
    world.closed_count = Some(closed);
    Ok(())
}
