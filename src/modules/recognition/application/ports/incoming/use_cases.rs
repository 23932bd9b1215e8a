use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::recognition::application::{
    domain::entities::Recognition, ports::outgoing::RecognitionData,
};
use crate::shared::validation::{optional_text, ValidationErrors};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecognitionInput {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub color: String,
    pub date: String,
    pub issuer: Option<String>,
    pub credential_url: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecognitionCommand {
    data: RecognitionData,
}

impl RecognitionCommand {
    pub fn new(input: RecognitionInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let title = errors.required(&input.title, "Title is required");
        errors.max_chars(&title, 200, "Title cannot exceed 200 characters");
        let description = errors.required(&input.description, "Description is required");
        let icon = errors.required(&input.icon, "Icon is required");
        let color = errors.required(&input.color, "Color is required");
        let date = errors.required(&input.date, "Date is required");

        errors.finish(Self {
            data: RecognitionData {
                title,
                description,
                icon,
                color,
                date,
                issuer: optional_text(input.issuer),
                credential_url: optional_text(input.credential_url),
            },
        })
    }

    pub fn into_data(self) -> RecognitionData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RecognitionError {
    #[error("Recognition not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RecognitionUseCase: Send + Sync {
    async fn list(&self) -> Result<Vec<Recognition>, RecognitionError>;

    async fn create(&self, command: RecognitionCommand) -> Result<Recognition, RecognitionError>;

    async fn update(
        &self,
        id: Uuid,
        command: RecognitionCommand,
    ) -> Result<Recognition, RecognitionError>;

    async fn delete(&self, id: Uuid) -> Result<(), RecognitionError>;
}
