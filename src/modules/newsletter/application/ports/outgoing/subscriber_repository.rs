use async_trait::async_trait;
use uuid::Uuid;

use crate::newsletter::application::domain::entities::Subscriber;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubscriberRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Subscriber not found")]
    NotFound,

    /// The unique email index rejected the insert.
    #[error("Email already subscribed")]
    Duplicate,
}

#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    async fn find_by_email(&self, email: &str)
        -> Result<Option<Subscriber>, SubscriberRepositoryError>;

    async fn create(&self, email: &str) -> Result<Subscriber, SubscriberRepositoryError>;

    /// Newest first; `search` is a case-insensitive substring of the email.
    async fn list(&self, search: Option<&str>)
        -> Result<Vec<Subscriber>, SubscriberRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), SubscriberRepositoryError>;
}
