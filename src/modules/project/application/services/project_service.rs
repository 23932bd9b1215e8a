use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::{
    domain::entities::Project,
    ports::{
        incoming::use_cases::{ProjectCommand, ProjectError, ProjectUseCase},
        outgoing::{ProjectRepository, ProjectRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct ProjectService<R>
where
    R: ProjectRepository,
{
    repository: R,
}

impl<R> ProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(err: ProjectRepositoryError) -> ProjectError {
    match err {
        ProjectRepositoryError::NotFound => ProjectError::NotFound,
        other => ProjectError::RepositoryError(other.to_string()),
    }
}

#[async_trait]
impl<R> ProjectUseCase for ProjectService<R>
where
    R: ProjectRepository,
{
    async fn list(&self) -> Result<Vec<Project>, ProjectError> {
        self.repository.list().await.map_err(map_repo_error)
    }

    async fn create(&self, command: ProjectCommand) -> Result<Project, ProjectError> {
        self.repository
            .create(command.into_data())
            .await
            .map_err(map_repo_error)
    }

    async fn update(&self, id: Uuid, command: ProjectCommand) -> Result<Project, ProjectError> {
        self.repository
            .update(id, command.into_data())
            .await
            .map_err(map_repo_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ProjectError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}
