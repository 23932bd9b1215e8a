use async_trait::async_trait;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::media::application::ports::outgoing::MediaStorage;
use crate::resume::application::{
    domain::entities::{NewResume, Resume},
    ports::{
        incoming::use_cases::{ResumeError, ResumeUseCase, UploadResumeCommand, RESUME_FOLDER},
        outgoing::{ResumeRepository, ResumeRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct ResumeService<R: ResumeRepository, S: MediaStorage> {
    repository: R,
    storage: S,
}

impl<R: ResumeRepository, S: MediaStorage> ResumeService<R, S> {
    pub fn new(repository: R, storage: S) -> Self {
        Self {
            repository,
            storage,
        }
    }
}

impl From<ResumeRepositoryError> for ResumeError {
    fn from(err: ResumeRepositoryError) -> Self {
        match err {
            ResumeRepositoryError::NotFound => ResumeError::NotFound,
            ResumeRepositoryError::DatabaseError(e) => ResumeError::RepositoryError(e),
        }
    }
}

#[async_trait]
impl<R: ResumeRepository, S: MediaStorage> ResumeUseCase for ResumeService<R, S> {
    async fn get_active(&self) -> Result<Option<Resume>, ResumeError> {
        Ok(self.repository.find_active().await?)
    }

    async fn upload(&self, command: UploadResumeCommand) -> Result<Resume, ResumeError> {
        let (file, uploaded_by) = command.into_parts();
        let file_name = file.file_name.clone();

        let stored = self
            .storage
            .upload(file, RESUME_FOLDER)
            .await
            .map_err(|e| ResumeError::MediaError(e.to_string()))?;

        let record = NewResume {
            file_name,
            file_url: stored.url,
            public_id: stored.public_id.clone(),
            uploaded_by,
        };

        match self.repository.replace_active(record).await {
            Ok(resume) => {
                info!(resume_id = %resume.id, "Resume uploaded and activated");
                Ok(resume)
            }
            Err(e) => {
                // Leave no orphaned asset behind when the record could not be saved.
                if let Err(cleanup) = self.storage.delete(&stored.public_id).await {
                    warn!(public_id = %stored.public_id, error = %cleanup, "Orphaned resume asset");
                }
                error!(error = %e, "Failed to store resume record");
                Err(e.into())
            }
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), ResumeError> {
        let resume = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ResumeError::NotFound)?;

        self.storage
            .delete(&resume.public_id)
            .await
            .map_err(|e| ResumeError::MediaError(e.to_string()))?;

        self.repository.delete(id).await?;
        info!(resume_id = %id, "Resume deleted");
        Ok(())
    }
}
