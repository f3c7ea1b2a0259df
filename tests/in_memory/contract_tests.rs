//! Runs the shared repository contract against the in-memory adapter.

use crate::board_contract;
use rstest::{fixture, rstest};
use taskboard::board::adapters::memory::InMemoryBoardRepository;

#[fixture]
fn repo() -> InMemoryBoardRepository {
    InMemoryBoardRepository::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_round_trips(repo: InMemoryBoardRepository) {
    board_contract::project_round_trips(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn duplicate_names_are_rejected(repo: InMemoryBoardRepository) {
    board_contract::duplicate_names_are_rejected(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn projects_list_in_creation_order(repo: InMemoryBoardRepository) {
    board_contract::projects_list_in_creation_order(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_order_survives_deletes_and_backdated_inserts(repo: InMemoryBoardRepository) {
    board_contract::project_order_survives_deletes_and_backdated_inserts(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_time_ties_keep_insertion_order(repo: InMemoryBoardRepository) {
    board_contract::creation_time_ties_keep_insertion_order(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_update_applies_patch(repo: InMemoryBoardRepository) {
    board_contract::project_update_applies_patch(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_delete_cascades(repo: InMemoryBoardRepository) {
    board_contract::project_delete_cascades(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_belong_to_their_project(repo: InMemoryBoardRepository) {
    board_contract::tasks_belong_to_their_project(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_requires_existing_project(repo: InMemoryBoardRepository) {
    board_contract::task_requires_existing_project(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_update_and_status_change(repo: InMemoryBoardRepository) {
    board_contract::task_update_and_status_change(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_delete_reports_presence(repo: InMemoryBoardRepository) {
    board_contract::task_delete_reports_presence(&repo).await;
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn close_overdue_is_selective_and_idempotent(repo: InMemoryBoardRepository) {
    board_contract::close_overdue_is_selective_and_idempotent(&repo).await;
}
