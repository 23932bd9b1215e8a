use async_trait::async_trait;
use uuid::Uuid;

use crate::solution::application::domain::entities::Solution;

#[derive(Debug, Clone, PartialEq)]
pub struct SolutionData {
    pub name: String,
    pub is_active: bool,
    pub order: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SolutionRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Solution not found")]
    NotFound,
}

#[async_trait]
pub trait SolutionRepository: Send + Sync {
    /// Ordered by `order` ascending.
    async fn list(&self, active_only: bool) -> Result<Vec<Solution>, SolutionRepositoryError>;

    async fn create(&self, data: SolutionData) -> Result<Solution, SolutionRepositoryError>;

    async fn update(&self, id: Uuid, data: SolutionData)
        -> Result<Solution, SolutionRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), SolutionRepositoryError>;
}
