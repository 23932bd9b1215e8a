use async_trait::async_trait;
use uuid::Uuid;

use crate::recognition::application::domain::entities::Recognition;

#[derive(Debug, Clone, PartialEq)]
pub struct RecognitionData {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub date: String,
    pub issuer: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecognitionRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Recognition not found")]
    NotFound,
}

#[async_trait]
pub trait RecognitionRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Recognition>, RecognitionRepositoryError>;

    async fn create(&self, data: RecognitionData)
        -> Result<Recognition, RecognitionRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: RecognitionData,
    ) -> Result<Recognition, RecognitionRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), RecognitionRepositoryError>;
}
