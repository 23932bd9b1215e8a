use async_trait::async_trait;
use uuid::Uuid;

use crate::testimonial::application::{
    domain::entities::Testimonial,
    ports::{
        incoming::use_cases::{TestimonialCommand, TestimonialError, TestimonialUseCase},
        outgoing::{TestimonialRepository, TestimonialRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct TestimonialService<R: TestimonialRepository> {
    repository: R,
}

impl<R: TestimonialRepository> TestimonialService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<TestimonialRepositoryError> for TestimonialError {
    fn from(err: TestimonialRepositoryError) -> Self {
        match err {
            TestimonialRepositoryError::NotFound => TestimonialError::NotFound,
            TestimonialRepositoryError::DatabaseError(e) => TestimonialError::RepositoryError(e),
        }
    }
}

#[async_trait]
impl<R: TestimonialRepository> TestimonialUseCase for TestimonialService<R> {
    async fn list(&self) -> Result<Vec<Testimonial>, TestimonialError> {
        Ok(self.repository.list().await?)
    }

    async fn create(&self, command: TestimonialCommand) -> Result<Testimonial, TestimonialError> {
        Ok(self.repository.create(command.into_data()).await?)
    }

    async fn update(
        &self,
        id: Uuid,
        command: TestimonialCommand,
    ) -> Result<Testimonial, TestimonialError> {
        Ok(self.repository.update(id, command.into_data()).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialError> {
        Ok(self.repository.delete(id).await?)
    }
}
