use async_trait::async_trait;
use serde::Deserialize;

use crate::hero::application::domain::entities::{Hero, HeroContent};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroInput {
    pub name: String,
    pub title: String,
    pub location: String,
    pub languages: String,
    pub profession: String,
    pub university: String,
    pub is_available: bool,
    pub profile_image: String,
    pub resume_url: String,
    pub bio: String,
}

impl Default for HeroInput {
    fn default() -> Self {
        Self {
            name: String::new(),
            title: String::new(),
            location: String::new(),
            languages: String::new(),
            profession: String::new(),
            university: String::new(),
            is_available: true,
            profile_image: String::new(),
            resume_url: String::new(),
            bio: String::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateHeroCommand {
    content: HeroContent,
}

impl UpdateHeroCommand {
    /// Every field is optional text; values are only trimmed.
    pub fn new(input: HeroInput) -> Self {
        Self {
            content: HeroContent {
                name: input.name.trim().to_string(),
                title: input.title.trim().to_string(),
                location: input.location.trim().to_string(),
                languages: input.languages.trim().to_string(),
                profession: input.profession.trim().to_string(),
                university: input.university.trim().to_string(),
                is_available: input.is_available,
                profile_image: input.profile_image.trim().to_string(),
                resume_url: input.resume_url.trim().to_string(),
                bio: input.bio.trim().to_string(),
            },
        }
    }

    pub fn into_content(self) -> HeroContent {
        self.content
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum HeroError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait HeroUseCase: Send + Sync {
    /// Stored hero, seeding the default row on first access.
    async fn get(&self) -> Result<Hero, HeroError>;

    async fn upsert(&self, command: UpdateHeroCommand) -> Result<Hero, HeroError>;
}
