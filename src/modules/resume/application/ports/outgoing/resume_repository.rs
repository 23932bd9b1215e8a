use async_trait::async_trait;
use uuid::Uuid;

use crate::resume::application::domain::entities::{NewResume, Resume};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Resume not found")]
    NotFound,
}

#[async_trait]
pub trait ResumeRepository: Send + Sync {
    /// Newest active resume.
    async fn find_active(&self) -> Result<Option<Resume>, ResumeRepositoryError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Resume>, ResumeRepositoryError>;

    /// Deactivates every stored resume and inserts `resume` as the active one,
    /// atomically.
    async fn replace_active(&self, resume: NewResume) -> Result<Resume, ResumeRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ResumeRepositoryError>;
}
