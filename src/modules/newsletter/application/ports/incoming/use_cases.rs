use async_trait::async_trait;
use uuid::Uuid;

use crate::newsletter::application::domain::entities::{Subscriber, SubscriberList};
use crate::shared::validation::{is_valid_email, normalize_email, ValidationErrors};

#[derive(Debug, Clone)]
pub struct SubscribeCommand {
    email: String,
}

impl SubscribeCommand {
    pub fn new(email: &str) -> Result<Self, ValidationErrors> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ValidationErrors::single("Email is required"));
        }
        if !is_valid_email(email) {
            return Err(ValidationErrors::single(
                "Please enter a valid email address",
            ));
        }
        Ok(Self {
            email: normalize_email(email),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum NewsletterError {
    #[error("Email is already subscribed to our newsletter")]
    AlreadySubscribed,

    #[error("Subscriber not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait NewsletterUseCase: Send + Sync {
    async fn subscribe(&self, command: SubscribeCommand) -> Result<Subscriber, NewsletterError>;

    async fn list(&self, search: Option<String>) -> Result<SubscriberList, NewsletterError>;

    async fn delete(&self, id: Uuid) -> Result<(), NewsletterError>;
}
