use async_trait::async_trait;
use uuid::Uuid;

use crate::social_link::application::domain::entities::SocialLink;

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLinkData {
    pub platform: String,
    pub username: String,
    pub url: String,
    pub is_active: bool,
    pub order: i32,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocialLinkRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Social link not found")]
    NotFound,
}

#[async_trait]
pub trait SocialLinkRepository: Send + Sync {
    /// By `order`, newest first on ties.
    async fn list(&self, active_only: bool) -> Result<Vec<SocialLink>, SocialLinkRepositoryError>;

    async fn create(&self, data: SocialLinkData) -> Result<SocialLink, SocialLinkRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: SocialLinkData,
    ) -> Result<SocialLink, SocialLinkRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), SocialLinkRepositoryError>;
}
