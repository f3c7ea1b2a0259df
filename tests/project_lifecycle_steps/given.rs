//! Given steps for project lifecycle BDD scenarios.

use super::world::{PastClock, ProjectLifecycleWorld, run_async};
use chrono::Duration;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::board::{
    domain::{NewTask, Task},
    ports::TaskRepository,
    services::{BoardLimits, CreateProjectRequest},
};

#[given("a board allowing {projects:u32} projects and {tasks:u32} tasks")]
fn board_with_limits(
    world: &mut ProjectLifecycleWorld,
    projects: u32,
    tasks: u32,
) -> Result<(), eyre::Report> {
    let limits = BoardLimits::new(usize::try_from(projects)?, usize::try_from(tasks)?);
    *world = ProjectLifecycleWorld::with_limits(limits);
    Ok(())
}

#[given(r#"a project named "{name}""#)]
fn project_named(world: &mut ProjectLifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let project = run_async(world.projects.create_project(CreateProjectRequest::new(name)))
        .wrap_err("create project for scenario")?;
    world.current_project = Some(project);
    Ok(())
}

#[given(r#"the project has a task titled "{title}""#)]
fn project_has_task(world: &mut ProjectLifecycleWorld, title: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let task = run_async(world.tasks.create_task(project_id, NewTask::new(title)))
        .wrap_err("create task for scenario")?;
    world.last_task = Some(task);
    Ok(())
}

#[given(r#"the project has a task titled "{title}" that was due {days:u32} days ago"#)]
fn project_has_overdue_task(
    world: &mut ProjectLifecycleWorld,
    title: String,
    days: u32,
) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let created_at = PastClock(Duration::days(i64::from(days) + 1));
    let deadline = (chrono::Utc::now() - Duration::days(i64::from(days)))
        .date_naive()
        .format("%Y-%m-%d")
        .to_string();
    let task = Task::create(
        project_id,
        NewTask::new(title).with_deadline(deadline),
        &created_at,
    )
    .wrap_err("build overdue task")?;
    run_async(world.repository.add_task(&task)).wrap_err("store overdue task")?;
    world.last_task = Some(task);
    Ok(())
}
