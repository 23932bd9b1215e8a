use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::validation::ValidationErrors;
use crate::solution::application::{domain::entities::Solution, ports::outgoing::SolutionData};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SolutionInput {
    /// The admin "services" form posts `title`.
    #[serde(alias = "title")]
    pub name: String,
    pub is_active: bool,
    pub order: i32,
}

impl Default for SolutionInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            is_active: true,
            order: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolutionCommand {
    data: SolutionData,
}

impl SolutionCommand {
    pub fn new(input: SolutionInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let name = errors.required(&input.name, "Name is required");
        errors.max_chars(&name, 150, "Name cannot exceed 150 characters");

        errors.finish(Self {
            data: SolutionData {
                name,
                is_active: input.is_active,
                order: input.order,
            },
        })
    }

    pub fn into_data(self) -> SolutionData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SolutionError {
    #[error("Solution not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SolutionUseCase: Send + Sync {
    async fn list_active(&self) -> Result<Vec<Solution>, SolutionError>;

    async fn list(&self) -> Result<Vec<Solution>, SolutionError>;

    async fn create(&self, command: SolutionCommand) -> Result<Solution, SolutionError>;

    async fn update(&self, id: Uuid, command: SolutionCommand) -> Result<Solution, SolutionError>;

    async fn delete(&self, id: Uuid) -> Result<(), SolutionError>;
}
