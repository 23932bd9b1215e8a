use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use crate::newsletter::application::{
    domain::entities::{Subscriber, SubscriberList},
    ports::{
        incoming::use_cases::{NewsletterError, NewsletterUseCase, SubscribeCommand},
        outgoing::{SubscriberRepository, SubscriberRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct NewsletterService<R: SubscriberRepository> {
    repository: R,
}

impl<R: SubscriberRepository> NewsletterService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<SubscriberRepositoryError> for NewsletterError {
    fn from(err: SubscriberRepositoryError) -> Self {
        match err {
            SubscriberRepositoryError::Duplicate => NewsletterError::AlreadySubscribed,
            SubscriberRepositoryError::NotFound => NewsletterError::NotFound,
            SubscriberRepositoryError::DatabaseError(e) => NewsletterError::RepositoryError(e),
        }
    }
}

#[async_trait]
impl<R: SubscriberRepository> NewsletterUseCase for NewsletterService<R> {
    async fn subscribe(&self, command: SubscribeCommand) -> Result<Subscriber, NewsletterError> {
        if self
            .repository
            .find_by_email(command.email())
            .await?
            .is_some()
        {
            warn!("Newsletter subscription rejected: already subscribed");
            return Err(NewsletterError::AlreadySubscribed);
        }

        // The unique index still decides when two requests race past the check.
        let subscriber = self.repository.create(command.email()).await?;
        info!(subscriber_id = %subscriber.id, "Newsletter subscription created");
        Ok(subscriber)
    }

    async fn list(&self, search: Option<String>) -> Result<SubscriberList, NewsletterError> {
        let search = search.as_deref().map(str::trim).filter(|s| !s.is_empty());
        Ok(self.repository.list(search).await?.into())
    }

    async fn delete(&self, id: Uuid) -> Result<(), NewsletterError> {
        self.repository.delete(id).await?;
        info!(subscriber_id = %id, "Newsletter subscriber deleted");
        Ok(())
    }
}
