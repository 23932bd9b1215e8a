use actix_web::{post, web, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use super::session_cookie;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::login_admin::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

// ───────────────────────────────────────────────
// Request / Response DTOs
// ───────────────────────────────────────────────

#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "admin@anirban.dev")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "correct horse battery staple")]
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct AdminDto {
    #[schema(example = "admin")]
    pub id: String,
    #[schema(example = "admin@anirban.dev")]
    pub email: String,
    #[schema(example = "Admin User")]
    pub name: String,
    #[schema(example = "admin")]
    pub role: String,
}

impl From<crate::auth::application::domain::entities::AdminIdentity> for AdminDto {
    fn from(admin: crate::auth::application::domain::entities::AdminIdentity) -> Self {
        Self {
            id: admin.id,
            email: admin.email,
            name: admin.name,
            role: admin.role,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    /// HS256 session token, also set as the `admin_session` cookie
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub admin: AdminDto,
}

// ───────────────────────────────────────────────
// Route
// ───────────────────────────────────────────────

/// Admin login
///
/// Checks the configured admin credentials and opens a session.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponseDto>)),
        (status = 400, description = "Malformed input", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_CREDENTIALS", "message": "Invalid email or password" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_admin_handler(
    req: HttpRequest,
    body: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> HttpResponse {
    let dto = body.into_inner();

    let request = match LoginRequest::new(dto.email, dto.password) {
        Ok(r) => r,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    info!(email = %request.email(), "Admin login attempt");

    match data.login_admin_use_case.execute(request).await {
        Ok(response) => {
            let max_age = (response.expires_at - Utc::now()).num_seconds();
            let cookie = session_cookie(&req, response.token.clone(), max_age);

            HttpResponse::Ok().cookie(cookie).json(ApiResponse::ok_body(LoginResponseDto {
                token: response.token,
                expires_at: response.expires_at,
                admin: response.admin.into(),
            }))
        }
        Err(e) => map_login_error(e),
    }
}

// ───────────────────────────────────────────────
// Error Mapping
// ───────────────────────────────────────────────

fn map_login_error(err: LoginError) -> HttpResponse {
    match err {
        LoginError::InvalidCredentials => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid email or password")
        }
        LoginError::PasswordVerificationFailed(e) => {
            error!(error = %e, "Password verification failed");
            ApiResponse::internal_error()
        }
        LoginError::TokenGenerationFailed(e) => {
            error!(error = %e, "Token generation failed");
            ApiResponse::internal_error()
        }
    }
}
