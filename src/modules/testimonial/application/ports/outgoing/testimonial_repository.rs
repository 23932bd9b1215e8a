use async_trait::async_trait;
use uuid::Uuid;

use crate::testimonial::application::domain::entities::Testimonial;

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialData {
    pub name: String,
    pub city: String,
    pub rating: i16,
    pub comment: String,
    pub avatar: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TestimonialRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Testimonial not found")]
    NotFound,
}

#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Newest first.
    async fn list(&self) -> Result<Vec<Testimonial>, TestimonialRepositoryError>;

    async fn create(&self, data: TestimonialData)
        -> Result<Testimonial, TestimonialRepositoryError>;

    async fn update(
        &self,
        id: Uuid,
        data: TestimonialData,
    ) -> Result<Testimonial, TestimonialRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialRepositoryError>;
}
