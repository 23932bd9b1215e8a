use actix_web::{post, web, HttpRequest, HttpResponse};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use super::cleared_session_cookie;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::extract_session_token;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct LogoutResponse {
    #[schema(example = "Logged out successfully")]
    pub message: String,
}

/// Admin logout
///
/// Revokes the current session token, if any, and clears the session cookie.
/// Succeeds for missing or already expired tokens.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = inline(SuccessResponse<LogoutResponse>)),
        (status = 500, description = "Revocation store unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_admin_handler(req: HttpRequest, data: web::Data<AppState>) -> HttpResponse {
    let token = extract_session_token(&req);

    match data.logout_admin_use_case.execute(token).await {
        Ok(()) => HttpResponse::Ok()
            .cookie(cleared_session_cookie())
            .json(ApiResponse::ok_body(LogoutResponse {
                message: "Logged out successfully".to_string(),
            })),
        Err(e) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}
