//! Storage-level behaviour specific to the `PostgreSQL` adapter.

use crate::board_contract::SteppingClock;
use crate::postgres::helpers::{TestDatabase, test_runtime};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::sql_types::{Text, Uuid as SqlUuid};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;
use taskboard::board::{
    domain::{NewTask, Project, Task},
    ports::{BoardRepositoryError, ProjectRepository, TaskRepository},
};

#[rstest]
fn migration_is_idempotent(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime()
        .block_on(db.repo().migrate())
        .expect("second migration run");
}

#[rstest]
fn status_column_rejects_unknown_values(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    let rt = test_runtime();
    let clock = SteppingClock::starting_at_noon(2026, 3, 1);
    let project = Project::create("P", "", &clock).expect("valid project");
    rt.block_on(db.repo().add_project(&project))
        .expect("add project");
    let task = Task::create(project.id(), NewTask::new("t"), &clock).expect("valid task");
    rt.block_on(db.repo().add_task(&task)).expect("add task");

    let mut conn = db.connection();
    let result = diesel::sql_query("UPDATE tasks SET status = $1 WHERE id = $2")
        .bind::<Text, _>("blocked")
        .bind::<SqlUuid, _>(task.id().into_inner())
        .execute(&mut conn);

    assert!(result.is_err(), "check constraint should reject the status");
}

#[rstest]
fn corrupt_rows_surface_as_invalid_persisted_data(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    let rt = test_runtime();
    let clock = SteppingClock::starting_at_noon(2026, 3, 1);
    let project = Project::create("P", "", &clock).expect("valid project");
    rt.block_on(db.repo().add_project(&project))
        .expect("add project");

    let mut conn = db.connection();
    conn.batch_execute(&format!(
        "UPDATE projects SET name = '' WHERE id = '{}'",
        project.id()
    ))
    .expect("corrupt the row");
    drop(conn);

    let result = rt.block_on(db.repo().find_project_by_id(project.id()));

    assert!(matches!(
        result,
        Err(BoardRepositoryError::InvalidPersistedData(_))
    ));
}
