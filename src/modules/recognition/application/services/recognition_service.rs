use async_trait::async_trait;
use uuid::Uuid;

use crate::recognition::application::{
    domain::entities::Recognition,
    ports::{
        incoming::use_cases::{RecognitionCommand, RecognitionError, RecognitionUseCase},
        outgoing::{RecognitionRepository, RecognitionRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct RecognitionService<R: RecognitionRepository> {
    repository: R,
}

impl<R: RecognitionRepository> RecognitionService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<RecognitionRepositoryError> for RecognitionError {
    fn from(err: RecognitionRepositoryError) -> Self {
        match err {
            RecognitionRepositoryError::NotFound => RecognitionError::NotFound,
            RecognitionRepositoryError::DatabaseError(e) => RecognitionError::RepositoryError(e),
        }
    }
}

#[async_trait]
impl<R: RecognitionRepository> RecognitionUseCase for RecognitionService<R> {
    async fn list(&self) -> Result<Vec<Recognition>, RecognitionError> {
        Ok(self.repository.list().await?)
    }

    async fn create(&self, command: RecognitionCommand) -> Result<Recognition, RecognitionError> {
        Ok(self.repository.create(command.into_data()).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        command: RecognitionCommand,
    ) -> Result<Recognition, RecognitionError> {
        Ok(self.repository.update(id, command.into_data()).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RecognitionError> {
        Ok(self.repository.delete(id).await?)
    }
}
