use async_trait::async_trait;

use crate::media::application::domain::entities::{FileUpload, StoredMedia};
use crate::media::application::domain::policies::{UploadPolicy, UploadRejection};

pub const DEFAULT_FOLDER: &str = "images";

/// A file that passed the upload policy, bound for `folder`.
#[derive(Debug, Clone)]
pub struct UploadMediaCommand {
    file: FileUpload,
    folder: String,
}

impl UploadMediaCommand {
    pub fn new(
        policy: &UploadPolicy,
        file: FileUpload,
        folder: Option<&str>,
    ) -> Result<Self, UploadRejection> {
        policy.check(&file)?;

        let folder = folder
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .unwrap_or(DEFAULT_FOLDER);
        if !folder
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(UploadRejection::InvalidFolder);
        }

        Ok(Self {
            file,
            folder: folder.to_string(),
        })
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn into_parts(self) -> (FileUpload, String) {
        (self.file, self.folder)
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),
}

#[async_trait]
pub trait UploadMediaUseCase: Send + Sync {
    async fn upload(&self, command: UploadMediaCommand) -> Result<StoredMedia, MediaError>;
}
