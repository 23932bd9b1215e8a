use async_trait::async_trait;
use serde::Deserialize;

use crate::about::application::domain::entities::{About, AboutContent, AboutView};
use crate::shared::validation::{optional_text, text_list, ValidationErrors};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutInput {
    pub bio: String,
    pub mission: String,
    pub goals: Vec<String>,
    pub currently_learning: Vec<String>,
    pub skills: Vec<String>,
    pub experience: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateAboutCommand {
    content: AboutContent,
}

impl UpdateAboutCommand {
    pub fn new(input: AboutInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let bio = errors.required(&input.bio, "Bio is required");
        let mission = errors.required(&input.mission, "Mission is required");

        errors.finish(Self {
            content: AboutContent {
                bio,
                mission,
                goals: text_list(input.goals),
                currently_learning: text_list(input.currently_learning),
                skills: text_list(input.skills),
                experience: optional_text(input.experience),
            },
        })
    }

    pub fn into_content(self) -> AboutContent {
        self.content
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AboutError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AboutUseCase: Send + Sync {
    /// Never writes.
    async fn get_public(&self) -> Result<AboutView, AboutError>;

    async fn get_or_create(&self) -> Result<About, AboutError>;

    async fn upsert(&self, command: UpdateAboutCommand) -> Result<About, AboutError>;
}
