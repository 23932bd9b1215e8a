use async_trait::async_trait;
use uuid::Uuid;

use crate::technology::application::domain::entities::{TechCategory, Technology};

#[derive(Debug, Clone, PartialEq)]
pub struct TechnologyData {
    pub name: String,
    pub category: TechCategory,
    pub proficiency: i16,
    pub logo: Option<String>,
    pub work_as: Option<String>,
    pub color: String,
    pub is_active: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TechnologyRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Technology not found")]
    NotFound,
}

#[async_trait]
pub trait TechnologyRepository: Send + Sync {
    /// Newest first; `active_only` drops deactivated entries.
    async fn list(&self, active_only: bool) -> Result<Vec<Technology>, TechnologyRepositoryError>;

    async fn create(&self, data: TechnologyData) -> Result<Technology, TechnologyRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: TechnologyData,
    ) -> Result<Technology, TechnologyRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), TechnologyRepositoryError>;
}
