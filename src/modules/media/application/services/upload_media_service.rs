use async_trait::async_trait;
use tracing::{error, info};

use crate::media::application::{
    domain::entities::StoredMedia,
    ports::{
        incoming::use_cases::{MediaError, UploadMediaCommand, UploadMediaUseCase},
        outgoing::MediaStorage,
    },
};

#[derive(Debug, Clone)]
pub struct UploadMediaService<S: MediaStorage> {
    storage: S,
}

impl<S: MediaStorage> UploadMediaService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl<S: MediaStorage> UploadMediaUseCase for UploadMediaService<S> {
    async fn upload(&self, command: UploadMediaCommand) -> Result<StoredMedia, MediaError> {
        let (file, folder) = command.into_parts();
        let file_name = file.file_name.clone();

        match self.storage.upload(file, &folder).await {
            Ok(stored) => {
                info!(public_id = %stored.public_id, folder = %folder, "Media uploaded");
                Ok(stored)
            }
            Err(e) => {
                error!(error = %e, file_name = %file_name, "Media upload failed");
                Err(MediaError::UploadFailed(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::application::domain::entities::FileUpload;
    use crate::media::application::domain::policies::UploadPolicy;
    use crate::media::application::ports::outgoing::MediaStorageError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingStorage {
        folders: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl MediaStorage for RecordingStorage {
        async fn upload(
            &self,
            file: FileUpload,
            folder: &str,
        ) -> Result<StoredMedia, MediaStorageError> {
            if self.fail {
                return Err(MediaStorageError::Unavailable("timeout".into()));
            }
            self.folders.lock().unwrap().push(folder.to_string());
            Ok(StoredMedia {
                url: format!("https://cdn.test/{folder}/{}", file.file_name),
                public_id: format!("{folder}/{}", file.file_name),
            })
        }

        async fn delete(&self, _public_id: &str) -> Result<(), MediaStorageError> {
            Ok(())
        }
    }

    fn command() -> UploadMediaCommand {
        UploadMediaCommand::new(
            &UploadPolicy::default(),
            FileUpload::new(b"GIF89a".to_vec(), "spinner.gif", "image/gif"),
            Some("profile"),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn uploads_into_requested_folder() {
        let service = UploadMediaService::new(RecordingStorage::default());

        let stored = service.upload(command()).await.unwrap();

        assert_eq!(stored.url, "https://cdn.test/profile/spinner.gif");
        assert_eq!(*service.storage.folders.lock().unwrap(), vec!["profile"]);
    }

    #[tokio::test]
    async fn storage_failure_is_upload_failed() {
        let service = UploadMediaService::new(RecordingStorage {
            fail: true,
            ..Default::default()
        });

        let err = service.upload(command()).await.unwrap_err();

        assert!(matches!(err, MediaError::UploadFailed(msg) if msg.contains("timeout")));
    }
}
