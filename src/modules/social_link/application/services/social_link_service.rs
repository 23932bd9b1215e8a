use async_trait::async_trait;
use uuid::Uuid;

use crate::social_link::application::{
    domain::entities::SocialLink,
    ports::{
        incoming::use_cases::{SocialLinkCommand, SocialLinkError, SocialLinkUseCase},
        outgoing::{SocialLinkRepository, SocialLinkRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct SocialLinkService<R: SocialLinkRepository> {
    repository: R,
}

impl<R: SocialLinkRepository> SocialLinkService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(err: SocialLinkRepositoryError) -> SocialLinkError {
    match err {
        SocialLinkRepositoryError::NotFound => SocialLinkError::NotFound,
        SocialLinkRepositoryError::DatabaseError(e) => SocialLinkError::RepositoryError(e),
    }
}

#[async_trait]
impl<R: SocialLinkRepository> SocialLinkUseCase for SocialLinkService<R> {
    async fn list_active(&self) -> Result<Vec<SocialLink>, SocialLinkError> {
        self.repository.list(true).await.map_err(map_repo_error)
    }

    async fn list(&self) -> Result<Vec<SocialLink>, SocialLinkError> {
        self.repository.list(false).await.map_err(map_repo_error)
    }

    async fn create(&self, command: SocialLinkCommand) -> Result<SocialLink, SocialLinkError> {
        self.repository
            .create(command.into_data())
            .await
            .map_err(map_repo_error)
    }

    async fn update(
        &self,
        id: Uuid,
        command: SocialLinkCommand,
    ) -> Result<SocialLink, SocialLinkError> {
        self.repository
            .update(id, command.into_data())
            .await
            .map_err(map_repo_error)
    }

    async fn delete(&self, id: Uuid) -> Result<(), SocialLinkError> {
        self.repository.delete(id).await.map_err(map_repo_error)
    }
}
