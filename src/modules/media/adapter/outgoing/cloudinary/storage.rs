use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, warn};

use super::config::CloudinaryConfig;
use super::signing::{sign, SIGNATURE_ALGORITHM};
use crate::media::application::{
    domain::entities::{FileUpload, StoredMedia},
    ports::outgoing::{MediaStorage, MediaStorageError},
};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    public_id: String,
}

#[derive(Debug, Deserialize)]
struct DestroyResponse {
    result: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorMessage,
}

#[derive(Debug, Deserialize)]
struct ErrorMessage {
    message: String,
}

/// Uploads through Cloudinary's signed REST API.
#[derive(Clone)]
pub struct CloudinaryStorage {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryStorage {
    pub fn new(client: reqwest::Client, config: CloudinaryConfig) -> Self {
        Self { client, config }
    }

    async fn send(&self, url: String, form: Form) -> Result<reqwest::Response, MediaStorageError> {
        let response = self
            .client
            .post(url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaStorageError::Unavailable(e.to_string()))?;

        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .map(|b| b.error.message)
            .unwrap_or_else(|_| status.to_string());
        Err(MediaStorageError::Rejected(message))
    }
}

/// Adds the timestamp, then the key and signature fields Cloudinary expects.
fn signed_fields(
    config: &CloudinaryConfig,
    mut params: Vec<(&'static str, String)>,
) -> Vec<(&'static str, String)> {
    params.push(("timestamp", Utc::now().timestamp().to_string()));
    let signature = sign(&params, &config.api_secret);

    params.push(("api_key", config.api_key.clone()));
    params.push(("signature", signature));
    params.push(("signature_algorithm", SIGNATURE_ALGORITHM.to_string()));
    params
}

fn form_from(fields: Vec<(&'static str, String)>) -> Form {
    fields
        .into_iter()
        .fold(Form::new(), |form, (k, v)| form.text(k, v))
}

#[async_trait]
impl MediaStorage for CloudinaryStorage {
    async fn upload(
        &self,
        file: FileUpload,
        folder: &str,
    ) -> Result<StoredMedia, MediaStorageError> {
        let folder = self.config.folder(folder);
        debug!(folder = %folder, size = file.size(), "Uploading to Cloudinary");

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)
            .map_err(|e| MediaStorageError::Rejected(e.to_string()))?;

        let form =
            form_from(signed_fields(&self.config, vec![("folder", folder)])).part("file", part);

        let body: UploadResponse = self
            .send(self.config.endpoint("auto", "upload"), form)
            .await?
            .json()
            .await
            .map_err(|e| MediaStorageError::Rejected(e.to_string()))?;

        Ok(StoredMedia {
            url: body.secure_url,
            public_id: body.public_id,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), MediaStorageError> {
        let form = form_from(signed_fields(
            &self.config,
            vec![("public_id", public_id.to_string())],
        ));

        let body: DestroyResponse = self
            .send(self.config.endpoint("image", "destroy"), form)
            .await?
            .json()
            .await
            .map_err(|e| MediaStorageError::Rejected(e.to_string()))?;

        match body.result.as_str() {
            "ok" => Ok(()),
            "not found" => {
                warn!(public_id = %public_id, "Asset already absent on Cloudinary");
                Ok(())
            }
            other => Err(MediaStorageError::Rejected(other.to_string())),
        }
    }
}
