use async_trait::async_trait;

use crate::hero::application::domain::entities::{Hero, HeroContent};

#[derive(Debug, Clone, thiserror::Error)]
pub enum HeroRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Single-row store for the hero section.
#[async_trait]
pub trait HeroRepository: Send + Sync {
    async fn find(&self) -> Result<Option<Hero>, HeroRepositoryError>;

    async fn insert(&self, content: HeroContent) -> Result<Hero, HeroRepositoryError>;

    /// Replaces the stored row, inserting one when the table is empty.
    async fn upsert(&self, content: HeroContent) -> Result<Hero, HeroRepositoryError>;
}
