use async_trait::async_trait;

use crate::media::application::domain::entities::{FileUpload, StoredMedia};

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaStorageError {
    #[error("Media host rejected the request: {0}")]
    Rejected(String),

    #[error("Media host unreachable: {0}")]
    Unavailable(String),
}

/// Third-party asset host.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// `folder` is relative to the configured root folder.
    async fn upload(&self, file: FileUpload, folder: &str)
        -> Result<StoredMedia, MediaStorageError>;

    /// Deleting an asset the host no longer has is not an error.
    async fn delete(&self, public_id: &str) -> Result<(), MediaStorageError>;
}
