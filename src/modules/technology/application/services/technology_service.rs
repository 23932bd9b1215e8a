use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::technology::application::{
    domain::entities::Technology,
    ports::{
        incoming::use_cases::{TechnologyCommand, TechnologyError, TechnologyUseCase},
        outgoing::{TechnologyRepository, TechnologyRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct TechnologyService<R: TechnologyRepository> {
    repository: R,
}

impl<R: TechnologyRepository> TechnologyService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(err: TechnologyRepositoryError) -> TechnologyError {
    match err {
        TechnologyRepositoryError::NotFound => TechnologyError::NotFound,
        TechnologyRepositoryError::DatabaseError(e) => TechnologyError::RepositoryError(e),
    }
}

#[async_trait]
impl<R: TechnologyRepository> TechnologyUseCase for TechnologyService<R> {
    async fn list_active(&self) -> Result<Vec<Technology>, TechnologyError> {
        self.repository.list(true).await.map_err(map_repo_error)
    }

    async fn list_all(&self) -> Result<Vec<Technology>, TechnologyError> {
        self.repository.list(false).await.map_err(map_repo_error)
    }

    async fn create(&self, command: TechnologyCommand) -> Result<Technology, TechnologyError> {
        let mut data = command.into_data();
        if !data.is_active {
            debug!(name = %data.name, "Ignoring isActive=false on create");
        }
        data.is_active = true;

        self.repository.create(data).await.map_err(map_repo_error)
    }

    async fn update(
        &self,
        id: Uuid,
        command: TechnologyCommand,
    ) -> Result<Technology, TechnologyError> {
        self.repository
            .update(id, command.into_data())
            .await
            .map_err(map_repo_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TechnologyError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}
