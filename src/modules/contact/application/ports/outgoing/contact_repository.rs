use async_trait::async_trait;
use uuid::Uuid;

use crate::contact::application::domain::entities::{
    ContactFilter, ContactMessage, ContactStatusChange, NewContactMessage,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ContactRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Contact message not found")]
    NotFound,
}

#[async_trait]
pub trait ContactRepository: Send + Sync {
    async fn create(&self, message: NewContactMessage)
        -> Result<ContactMessage, ContactRepositoryError>;

    /// Newest first.
    async fn list(&self, filter: &ContactFilter)
        -> Result<Vec<ContactMessage>, ContactRepositoryError>;

    async fn update_status(
        &self,
        id: Uuid,
        change: ContactStatusChange,
    ) -> Result<ContactMessage, ContactRepositoryError>;

    async fn delete(&self, id: Uuid) -> Result<(), ContactRepositoryError>;
}
