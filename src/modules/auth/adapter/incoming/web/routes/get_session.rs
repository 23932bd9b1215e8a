use actix_web::{get, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::login_admin::AdminDto;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub admin: AdminDto,
    pub expires_at: DateTime<Utc>,
}

/// Current admin session
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Session is valid", body = inline(SuccessResponse<SessionResponse>)),
        (status = 401, description = "No valid session", body = ErrorResponse),
    )
)]
#[get("/api/auth/session")]
pub async fn get_session_handler(session: AdminSession) -> HttpResponse {
    ApiResponse::success(SessionResponse {
        admin: session.admin.into(),
        expires_at: session.expires_at,
    })
}
