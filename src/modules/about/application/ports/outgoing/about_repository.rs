use async_trait::async_trait;

use crate::about::application::domain::entities::{About, AboutContent};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait AboutRepository: Send + Sync {
    async fn find(&self) -> Result<Option<About>, AboutRepositoryError>;

    async fn insert(&self, content: AboutContent) -> Result<About, AboutRepositoryError>;

    async fn upsert(&self, content: AboutContent) -> Result<About, AboutRepositoryError>;
}
