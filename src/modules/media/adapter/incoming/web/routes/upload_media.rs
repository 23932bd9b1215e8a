use actix_web::{post, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{map_upload_rejection, media_upload_failed, read_upload};
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::media::application::ports::incoming::use_cases::UploadMediaCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UploadQuery {
    /// Sub-folder under the configured root, `images` when omitted
    pub folder: Option<String>,
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedMediaDto {
    #[schema(example = "https://res.cloudinary.com/demo/image/upload/v1/anirban-portfolio/images/logo.png")]
    pub url: String,
    pub public_id: String,
}

/// Upload an image for technology logos or the profile picture.
///
/// Send the image as the `file` part of a multipart form, or as the raw body
/// described by `Content-Type` and `X-File-Name`.
#[utoipa::path(
    post,
    path = "/api/admin/upload",
    tag = "media",
    params(UploadQuery),
    request_body(content = Vec<u8>, content_type = "multipart/form-data", description = "Form with a `file` part and an optional `folder` field"),
    security(("BearerAuth" = [])),
    responses(
        (status = 201, description = "Uploaded", body = inline(SuccessResponse<UploadedMediaDto>)),
        (status = 400, description = "Empty file, invalid name or malformed form", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 413, description = "File too large", body = ErrorResponse),
        (status = 415, description = "Unsupported file type", body = ErrorResponse),
        (status = 502, description = "Media host failure", body = ErrorResponse),
    )
)]
#[post("/api/admin/upload")]
pub async fn upload_media_handler(
    _session: AdminSession,
    req: HttpRequest,
    data: web::Data<AppState>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> HttpResponse {
    let upload = match read_upload(&req, body).await {
        Ok(upload) => upload,
        Err(resp) => return resp,
    };
    let folder = query.into_inner().folder.or(upload.folder);

    let command = match UploadMediaCommand::new(&data.upload_policy, upload.file, folder.as_deref())
    {
        Ok(c) => c,
        Err(rejection) => return map_upload_rejection(rejection),
    };

    match data.upload_media_use_case.upload(command).await {
        Ok(stored) => ApiResponse::created(UploadedMediaDto {
            url: stored.url,
            public_id: stored.public_id,
        }),
        Err(_) => media_upload_failed(),
    }
}
