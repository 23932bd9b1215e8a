use async_trait::async_trait;
use tracing::info;

use crate::about::application::{
    domain::entities::{About, AboutContent, AboutView},
    ports::{
        incoming::use_cases::{AboutError, AboutUseCase, UpdateAboutCommand},
        outgoing::{AboutRepository, AboutRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct AboutService<R: AboutRepository> {
    repository: R,
}

impl<R: AboutRepository> AboutService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn map_repo_error(err: AboutRepositoryError) -> AboutError {
    match err {
        AboutRepositoryError::DatabaseError(e) => AboutError::RepositoryError(e),
    }
}

#[async_trait]
impl<R: AboutRepository> AboutUseCase for AboutService<R> {
    async fn get_public(&self) -> Result<AboutView, AboutError> {
        let stored = self.repository.find().await.map_err(map_repo_error)?;

        Ok(match stored {
            Some(about) => AboutView::Stored(about),
            None => AboutView::Default(AboutContent::default()),
        })
    }

    async fn get_or_create(&self) -> Result<About, AboutError> {
        if let Some(about) = self.repository.find().await.map_err(map_repo_error)? {
            return Ok(about);
        }

        let about = self
            .repository
            .insert(AboutContent::default())
            .await
            .map_err(map_repo_error)?;
        info!(about_id = %about.id, "Default about data created");
        Ok(about)
    }

    async fn upsert(&self, command: UpdateAboutCommand) -> Result<About, AboutError> {
        self.repository
            .upsert(command.into_content())
            .await
            .map_err(map_repo_error)
    }
}
