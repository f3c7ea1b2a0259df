//! Runs the shared repository contract against the `PostgreSQL` adapter.

use crate::board_contract;
use crate::postgres::helpers::{TestDatabase, test_runtime};
use pg_embedded_setup_unpriv::{TestCluster, test_support::shared_test_cluster};
use rstest::rstest;

#[rstest]
fn project_round_trips(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::project_round_trips(db.repo()));
}

#[rstest]
fn duplicate_names_are_rejected(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::duplicate_names_are_rejected(db.repo()));
}

#[rstest]
fn projects_list_in_creation_order(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::projects_list_in_creation_order(db.repo()));
}

#[rstest]
fn project_order_survives_deletes_and_backdated_inserts(
    shared_test_cluster: &'static TestCluster,
) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(
        board_contract::project_order_survives_deletes_and_backdated_inserts(db.repo()),
    );
}

#[rstest]
fn creation_time_ties_keep_insertion_order(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::creation_time_ties_keep_insertion_order(
        db.repo(),
    ));
}

#[rstest]
fn project_update_applies_patch(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::project_update_applies_patch(db.repo()));
}

#[rstest]
fn project_delete_cascades(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::project_delete_cascades(db.repo()));
}

#[rstest]
fn tasks_belong_to_their_project(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::tasks_belong_to_their_project(db.repo()));
}

#[rstest]
fn task_requires_existing_project(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::task_requires_existing_project(db.repo()));
}

#[rstest]
fn task_update_and_status_change(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::task_update_and_status_change(db.repo()));
}

#[rstest]
fn task_delete_reports_presence(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::task_delete_reports_presence(db.repo()));
}

#[rstest]
fn close_overdue_is_selective_and_idempotent(shared_test_cluster: &'static TestCluster) {
    let db = TestDatabase::create(shared_test_cluster);
    test_runtime().block_on(board_contract::close_overdue_is_selective_and_idempotent(
        db.repo(),
    ));
}
