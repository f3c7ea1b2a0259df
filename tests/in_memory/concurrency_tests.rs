//! Concurrent access to a single in-memory store.

use crate::board_contract::SteppingClock;
use std::sync::Arc;
use taskboard::board::{
    adapters::memory::InMemoryBoardRepository,
    domain::{NewTask, Project, Task},
    ports::{BoardRepositoryError, ProjectRepository, TaskRepository},
};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_with_one_name_admit_a_single_winner() {
    let repo = Arc::new(InMemoryBoardRepository::new());
    let clock = Arc::new(SteppingClock::starting_at_noon(2026, 3, 1));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let task_repo = Arc::clone(&repo);
        let task_clock = Arc::clone(&clock);
        handles.push(tokio::spawn(async move {
            let project = Project::create("contested", "", &*task_clock).expect("valid project");
            task_repo.add_project(&project).await
        }));
    }

    let mut successes = 0;
    for handle in handles {
        match handle.await.expect("task should not panic") {
            Ok(()) => successes += 1,
            Err(BoardRepositoryError::DuplicateProjectName(_)) => {}
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(repo.count_projects().await.expect("count"), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_task_inserts_are_all_recorded() {
    let repo = Arc::new(InMemoryBoardRepository::new());
    let clock = Arc::new(SteppingClock::starting_at_noon(2026, 3, 1));
    let project = Project::create("busy", "", &*clock).expect("valid project");
    repo.add_project(&project).await.expect("add project");

    let mut handles = Vec::new();
    for n in 0..16 {
        let task_repo = Arc::clone(&repo);
        let task_clock = Arc::clone(&clock);
        let project_id = project.id();
        handles.push(tokio::spawn(async move {
            let task = Task::create(project_id, NewTask::new(format!("task {n}")), &*task_clock)
                .expect("valid task");
            task_repo.add_task(&task).await
        }));
    }
    for handle in handles {
        handle
            .await
            .expect("task should not panic")
            .expect("insert should succeed");
    }

    assert_eq!(repo.count_tasks().await.expect("count"), 16);
    let listed = repo
        .list_tasks_of_project(project.id())
        .await
        .expect("list");
    assert!(
        listed
            .iter()
            .zip(listed.iter().skip(1))
            .all(|(earlier, later)| earlier.created_at() <= later.created_at()),
        "tasks are listed in creation order"
    );
}
