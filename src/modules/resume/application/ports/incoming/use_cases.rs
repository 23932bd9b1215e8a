use async_trait::async_trait;
use uuid::Uuid;

use crate::media::application::domain::entities::FileUpload;
use crate::media::application::domain::policies::{MediaKind, UploadPolicy, UploadRejection};
use crate::resume::application::domain::entities::Resume;

pub const RESUME_FOLDER: &str = "resume";

#[derive(Debug, Clone)]
pub struct UploadResumeCommand {
    file: FileUpload,
    uploaded_by: String,
}

impl UploadResumeCommand {
    /// Only PDFs pass, checked by content type and by the `%PDF` signature.
    pub fn new(
        policy: &UploadPolicy,
        file: FileUpload,
        uploaded_by: &str,
    ) -> Result<Self, UploadRejection> {
        match policy.check(&file)? {
            MediaKind::Pdf => Ok(Self {
                file,
                uploaded_by: uploaded_by.to_string(),
            }),
            MediaKind::Image => Err(UploadRejection::UnsupportedType(file.content_type)),
        }
    }

    pub fn into_parts(self) -> (FileUpload, String) {
        (self.file, self.uploaded_by)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ResumeError {
    #[error("Resume not found")]
    NotFound,

    #[error("Media host error: {0}")]
    MediaError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ResumeUseCase: Send + Sync {
    async fn get_active(&self) -> Result<Option<Resume>, ResumeError>;

    async fn upload(&self, command: UploadResumeCommand) -> Result<Resume, ResumeError>;

    async fn delete(&self, id: Uuid) -> Result<(), ResumeError>;
}
