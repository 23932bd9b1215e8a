use async_trait::async_trait;
use serde::Deserialize;
use uuid::Uuid;

use crate::shared::validation::ValidationErrors;
use crate::social_link::application::{
    domain::entities::SocialLink, ports::outgoing::SocialLinkData,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLinkInput {
    pub platform: String,
    pub username: String,
    pub url: String,
    pub is_active: bool,
    pub order: i32,
}

impl Default for SocialLinkInput {
    fn default() -> Self {
        Self {
            platform: String::new(),
            username: String::new(),
            url: String::new(),
            is_active: true,
            order: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SocialLinkCommand {
    data: SocialLinkData,
}

impl SocialLinkCommand {
    pub fn new(input: SocialLinkInput) -> Result<Self, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let platform = errors.required(&input.platform, "Platform is required");
        errors.max_chars(&platform, 50, "Platform cannot exceed 50 characters");
        let url = errors.required(&input.url, "URL is required");
        let username = input.username.trim().to_string();
        errors.max_chars(&username, 100, "Username cannot exceed 100 characters");

        errors.finish(Self {
            data: SocialLinkData {
                platform,
                username,
                url,
                is_active: input.is_active,
                order: input.order,
            },
        })
    }

    pub fn into_data(self) -> SocialLinkData {
        self.data
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SocialLinkError {
    #[error("Social link not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SocialLinkUseCase: Send + Sync {
    async fn list_active(&self) -> Result<Vec<SocialLink>, SocialLinkError>;

    async fn list(&self) -> Result<Vec<SocialLink>, SocialLinkError>;

    async fn create(&self, command: SocialLinkCommand) -> Result<SocialLink, SocialLinkError>;

    async fn update(
        &self,
        id: Uuid,
        command: SocialLinkCommand,
    ) -> Result<SocialLink, SocialLinkError>;

    async fn delete(&self, id: Uuid) -> Result<(), SocialLinkError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_active_with_empty_username() {
        let data = SocialLinkCommand::new(SocialLinkInput {
            platform: "GitHub".into(),
            url: "https://github.com/anirban".into(),
            ..Default::default()
        })
        .unwrap()
        .into_data();

        assert!(data.is_active);
        assert_eq!(data.username, "");
        assert_eq!(data.order, 0);
    }

    #[test]
    fn platform_and_url_required() {
        let err = SocialLinkCommand::new(SocialLinkInput::default()).unwrap_err();
        assert_eq!(err.to_string(), "Platform is required, URL is required");
    }
}
