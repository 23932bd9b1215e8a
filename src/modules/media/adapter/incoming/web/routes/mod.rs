pub mod upload_media;

pub use upload_media::{upload_media_handler, UploadQuery, UploadedMediaDto};

use actix_multipart::{Multipart, MultipartError};
use actix_web::error::PayloadError;
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use futures::StreamExt;
use tracing::warn;

use crate::media::application::domain::entities::FileUpload;
use crate::media::application::domain::policies::UploadRejection;
use crate::shared::api::ApiResponse;

pub const FILE_NAME_HEADER: &str = "X-File-Name";
pub const FILE_FIELD: &str = "file";
pub const FOLDER_FIELD: &str = "folder";

/// A file taken from an upload request, plus the optional `folder` form field.
#[derive(Debug)]
pub struct ReceivedUpload {
    pub file: FileUpload,
    pub folder: Option<String>,
}

/// Builds a `FileUpload` from a raw request body, its `Content-Type` and the
/// `X-File-Name` header.
pub fn file_from_request(req: &HttpRequest, body: &[u8]) -> FileUpload {
    let header = |name: &str| {
        req.headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    };

    FileUpload::new(body.to_vec(), header(FILE_NAME_HEADER), header("Content-Type"))
}

fn is_multipart(req: &HttpRequest) -> bool {
    req.headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| {
            ct.trim_start()
                .to_ascii_lowercase()
                .starts_with("multipart/form-data")
        })
}

/// Reads an upload sent either as `multipart/form-data` with a `file` part,
/// or as a raw body described by `Content-Type` and `X-File-Name`.
pub async fn read_upload(
    req: &HttpRequest,
    body: web::Bytes,
) -> Result<ReceivedUpload, HttpResponse> {
    if !is_multipart(req) {
        return Ok(ReceivedUpload {
            file: file_from_request(req, &body),
            folder: None,
        });
    }

    let stream = futures::stream::once(async move { Ok::<_, PayloadError>(body) });
    let mut form = Multipart::new(req.headers(), stream);
    let mut file = None;
    let mut folder = None;

    while let Some(field) = form.next().await {
        let mut field = field.map_err(malformed_multipart)?;
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .unwrap_or_default()
            .to_string();
        let content_type = field
            .content_type()
            .map(|m| m.essence_str().to_string())
            .unwrap_or_default();

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk.map_err(malformed_multipart)?);
        }

        match name.as_str() {
            FILE_FIELD if file.is_none() => {
                file = Some(FileUpload::new(bytes, &file_name, &content_type));
            }
            FOLDER_FIELD => {
                let value = String::from_utf8_lossy(&bytes).trim().to_string();
                folder = (!value.is_empty()).then_some(value);
            }
            _ => {}
        }
    }

    match file {
        Some(file) => Ok(ReceivedUpload { file, folder }),
        None => Err(ApiResponse::bad_request(
            "MISSING_FILE",
            "No file uploaded in the 'file' field",
        )),
    }
}

fn malformed_multipart(err: MultipartError) -> HttpResponse {
    warn!(error = %err, "Rejected malformed multipart upload");
    ApiResponse::bad_request("INVALID_MULTIPART", "Malformed multipart body")
}

pub fn map_upload_rejection(rejection: UploadRejection) -> HttpResponse {
    let message = rejection.to_string();
    match rejection {
        UploadRejection::Empty => ApiResponse::bad_request("EMPTY_FILE", &message),
        UploadRejection::InvalidFileName => ApiResponse::bad_request("INVALID_FILE_NAME", &message),
        UploadRejection::InvalidFolder => ApiResponse::bad_request("INVALID_FOLDER", &message),
        UploadRejection::UnsupportedType(_) | UploadRejection::NotAPdf => {
            ApiResponse::unsupported_media_type("UNSUPPORTED_MEDIA_TYPE", &message)
        }
        UploadRejection::TooLarge { .. } => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &message)
        }
    }
}

pub fn media_upload_failed() -> HttpResponse {
    ApiResponse::bad_gateway("MEDIA_UPLOAD_FAILED", "Failed to upload file to media host")
}
