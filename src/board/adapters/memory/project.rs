//! [`ProjectRepository`] for the in-memory store.

use super::{InMemoryBoardRepository, with_tasks};
use crate::board::{
    domain::{Project, ProjectId, ProjectName, ProjectPatch},
    ports::{BoardRepositoryError, BoardRepositoryResult, ProjectRepository},
};
use async_trait::async_trait;

#[async_trait]
impl ProjectRepository for InMemoryBoardRepository {
    async fn add_project(&self, project: &Project) -> BoardRepositoryResult<()> {
        let mut state = self.write()?;
        if state.projects.contains_key(&project.id()) {
            return Err(BoardRepositoryError::DuplicateProject(project.id()));
        }
        if state.name_index.contains_key(project.name()) {
            return Err(BoardRepositoryError::DuplicateProjectName(
                project.name().clone(),
            ));
        }

        state
            .name_index
            .insert(project.name().clone(), project.id());
        state.project_order.push(project.id());
        state
            .projects
            .insert(project.id(), with_tasks(project, Vec::new()));
        Ok(())
    }

    async fn find_project_by_id(&self, id: ProjectId) -> BoardRepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state.assemble(id))
    }

    async fn find_project_by_name(
        &self,
        name: &ProjectName,
    ) -> BoardRepositoryResult<Option<Project>> {
        let state = self.read()?;
        Ok(state
            .name_index
            .get(name)
            .and_then(|id| state.assemble(*id)))
    }

    async fn list_projects(&self) -> BoardRepositoryResult<Vec<Project>> {
        let state = self.read()?;
        Ok(state.ordered_projects())
    }

    async fn count_projects(&self) -> BoardRepositoryResult<usize> {
        let state = self.read()?;
        Ok(state.projects.len())
    }

    async fn update_project(
        &self,
        id: ProjectId,
        patch: &ProjectPatch,
    ) -> BoardRepositoryResult<Project> {
        let mut state = self.write()?;
        let mut project = state
            .projects
            .get(&id)
            .cloned()
            .ok_or(BoardRepositoryError::ProjectNotFound(id))?;

        if let Some(new_name) = &patch.name {
            let taken_by_other = state
                .name_index
                .get(new_name)
                .is_some_and(|owner| *owner != id);
            if taken_by_other {
                return Err(BoardRepositoryError::DuplicateProjectName(
                    new_name.clone(),
                ));
            }
            state.name_index.remove(project.name());
            state.name_index.insert(new_name.clone(), id);
        }

        project.apply(patch);
        state.projects.insert(id, project);
        state
            .assemble(id)
            .ok_or(BoardRepositoryError::ProjectNotFound(id))
    }

    async fn delete_project(&self, id: ProjectId) -> BoardRepositoryResult<bool> {
        let mut guard = self.write()?;
        let state = &mut *guard;
        let Some(project) = state.projects.remove(&id) else {
            return Ok(false);
        };

        state.name_index.remove(project.name());
        state.project_order.retain(|project_id| *project_id != id);
        state.tasks.retain(|_, task| task.project_id() != id);
        let tasks = &state.tasks;
        state.task_order.retain(|task_id| tasks.contains_key(task_id));
        Ok(true)
    }
}
