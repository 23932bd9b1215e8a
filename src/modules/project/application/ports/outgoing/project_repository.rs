use async_trait::async_trait;
use uuid::Uuid;

use crate::project::application::domain::entities::{Project, ProjectStatus};

/// Full set of writable project fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectData {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub tech_stack: Vec<String>,
    pub url: Option<String>,
    pub github_url: Option<String>,
    pub featured: bool,
    pub status: ProjectStatus,
    pub order: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Project not found")]
    NotFound,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Ordered by `order` ascending, newest first within the same order.
    async fn list(&self) -> Result<Vec<Project>, ProjectRepositoryError>;

    async fn create(&self, data: ProjectData) -> Result<Project, ProjectRepositoryError>;

    async fn update(&self, id: Uuid, data: ProjectData) -> Result<Project, ProjectRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ProjectRepositoryError>;
}
