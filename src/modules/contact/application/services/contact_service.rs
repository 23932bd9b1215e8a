use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

use crate::contact::application::{
    domain::entities::{ContactFilter, ContactInbox, ContactMessage},
    ports::{
        incoming::use_cases::{
            ContactError, ContactUseCase, SubmitContactCommand, UpdateContactStatusCommand,
        },
        outgoing::{ContactRepository, ContactRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct ContactService<R: ContactRepository> {
    repository: R,
}

impl<R: ContactRepository> ContactService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

impl From<ContactRepositoryError> for ContactError {
    fn from(err: ContactRepositoryError) -> Self {
        match err {
            ContactRepositoryError::NotFound => ContactError::NotFound,
            ContactRepositoryError::DatabaseError(e) => ContactError::RepositoryError(e),
        }
    }
}

#[async_trait]
impl<R: ContactRepository> ContactUseCase for ContactService<R> {
    async fn submit(&self, command: SubmitContactCommand) -> Result<Uuid, ContactError> {
        let stored = self.repository.create(command.into_message()).await?;
        info!(contact_id = %stored.id, "Contact message created");
        Ok(stored.id)
    }

    async fn list(&self, filter: ContactFilter) -> Result<ContactInbox, ContactError> {
        let messages = self.repository.list(&filter).await?;
        Ok(ContactInbox::new(messages))
    }

    async fn update_status(
        &self,
        id: Uuid,
        command: UpdateContactStatusCommand,
    ) -> Result<ContactMessage, ContactError> {
        Ok(self.repository.update_status(id, command.change()).await?)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ContactError> {
        self.repository.delete(id).await?;
        info!(contact_id = %id, "Contact message deleted");
        Ok(())
    }
}
