use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::validation::{optional_text, ValidationErrors};
use crate::technology::application::{
    domain::entities::{TechCategory, Technology, DEFAULT_COLOR, DEFAULT_PROFICIENCY},
    ports::outgoing::TechnologyData,
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnologyInput {
    pub name: String,
    pub category: Option<String>,
    pub proficiency: Option<i64>,
    pub logo: Option<String>,
    pub work_as: Option<String>,
    pub color: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct TechnologyCommand {
    data: TechnologyData,
}

impl TechnologyCommand {
    pub fn new(input: TechnologyInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let name = errors.required(&input.name, "Technology name is required");
        errors.max_chars(&name, 50, "Name cannot exceed 50 characters");

        let category = match input.category.as_deref().map(str::trim) {
            None | Some("") => TechCategory::default(),
            Some(raw) => TechCategory::parse(raw).unwrap_or_else(|| {
                errors.add(format!("`{raw}` is not a valid category"));
                TechCategory::default()
            }),
        };

        let proficiency = input.proficiency.unwrap_or(DEFAULT_PROFICIENCY as i64);
        errors.within(proficiency, 0, 100, "Proficiency must be between 0 and 100");

        let work_as = optional_text(input.work_as);
        if let Some(w) = &work_as {
            errors.max_chars(w, 100, "Work description cannot exceed 100 characters");
        }

        errors.finish(Self {
            data: TechnologyData {
                name,
                category,
                proficiency: proficiency.clamp(0, 100) as i16,
                logo: optional_text(input.logo),
                work_as,
                color: optional_text(input.color).unwrap_or_else(|| DEFAULT_COLOR.to_string()),
                is_active: input.is_active.unwrap_or(true),
            },
        })
    }

    pub fn into_data(self) -> TechnologyData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TechnologyError {
    #[error("Technology not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait TechnologyUseCase: Send + Sync {
    /// Public tech stack.
    async fn list_active(&self) -> Result<Vec<Technology>, TechnologyError>;

    async fn list_all(&self) -> Result<Vec<Technology>, TechnologyError>;

    /// New entries are always stored active.
    async fn create(&self, command: TechnologyCommand) -> Result<Technology, TechnologyError>;

    async fn update(
        &self,
        id: Uuid,
        command: TechnologyCommand,
    ) -> Result<Technology, TechnologyError>;

    async fn delete(&self, id: Uuid) -> Result<(), TechnologyError>;
}
