use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::validation::{optional_text, ValidationErrors};
use crate::testimonial::application::{
    domain::entities::{Testimonial, MAX_RATING, MIN_RATING},
    ports::outgoing::TestimonialData,
};

//
// ──────────────────────────────────────────────────────────
// Testimonial Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialInput {
    pub name: String,
    pub city: String,
    pub rating: Option<i64>,
    pub comment: String,
    pub avatar: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone)]
pub struct TestimonialCommand {
    data: TestimonialData,
}

impl TestimonialCommand {
    pub fn new(input: TestimonialInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.required(&input.name, "Name is required");
        let city = errors.required(&input.city, "City is required");
        let rating = match input.rating {
            Some(rating) => {
                errors.within(
                    rating,
                    MIN_RATING as i64,
                    MAX_RATING as i64,
                    "Rating must be between 1 and 5",
                );
                rating.clamp(MIN_RATING as i64, MAX_RATING as i64) as i16
            }
            None => {
                errors.add("Rating is required");
                MAX_RATING
            }
        };
        let comment = errors.required(&input.comment, "Comment is required");
        let date = errors.required(&input.date, "Date is required");

        errors.finish(Self {
            data: TestimonialData {
                name,
                city,
                rating,
                comment,
                avatar: optional_text(input.avatar),
                date,
            },
        })
    }

    pub fn into_data(self) -> TestimonialData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TestimonialError {
    #[error("Testimonial not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait TestimonialUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<Testimonial>, TestimonialError>;

    async fn create(&self, command: TestimonialCommand) -> Result<Testimonial, TestimonialError>;

    async fn update(
        &self,
        id: Uuid,
        command: TestimonialCommand,
    ) -> Result<Testimonial, TestimonialError>;

    async fn delete(&self, id: Uuid) -> Result<(), TestimonialError>;
}
