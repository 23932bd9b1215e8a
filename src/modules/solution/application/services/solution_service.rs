use async_trait::async_trait;
use uuid::Uuid;

use crate::solution::application::{
    domain::entities::Solution,
    ports::{
        incoming::use_cases::{SolutionCommand, SolutionError, SolutionUseCase},
        outgoing::{SolutionRepository, SolutionRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct SolutionService<R: SolutionRepository> {
    repository: R,
}

impl<R: SolutionRepository> SolutionService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<SolutionRepositoryError> for SolutionError {
    fn from(err: SolutionRepositoryError) -> Self {
        match err {
            SolutionRepositoryError::NotFound => SolutionError::NotFound,
            SolutionRepositoryError::DatabaseError(e) => SolutionError::RepositoryError(e),
        }
    }
}

#[async_trait]
impl<R: SolutionRepository> SolutionUseCase for SolutionService<R> {
    async fn list_active(&self) -> Result<Vec<Solution>, SolutionError> {
        Ok(self.repository.list(true).await?)
    }

    async fn list(&self) -> Result<Vec<Solution>, SolutionError> {
        Ok(self.repository.list(false).await?)
    }

    async fn create(&self, command: SolutionCommand) -> Result<Solution, SolutionError> {
        Ok(self.repository.create(command.into_data()).await?)
    }

    async fn update(&self, id: Uuid, command: SolutionCommand) -> Result<Solution, SolutionError> {
        Ok(self.repository.update(id, command.into_data()).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SolutionError> {
        Ok(self.repository.delete(id).await?)
    }
}
