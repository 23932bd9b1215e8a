use actix_web::{get, put, web, HttpResponse};
use tracing::info;

use super::map_about_error;
use crate::about::application::ports::incoming::use_cases::{AboutInput, UpdateAboutCommand};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/about")]
pub async fn get_admin_about_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.about_use_case.get_or_create().await {
        Ok(about) => ApiResponse::success(about),
        Err(e) => map_about_error(e),
    }
}

#[put("/api/admin/about")]
pub async fn update_about_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<AboutInput>,
) -> HttpResponse {
    let command = match UpdateAboutCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.about_use_case.upsert(command).await {
        Ok(about) => {
            info!(about_id = %about.id, "About section updated");
            ApiResponse::success(about)
        }
        Err(e) => map_about_error(e),
    }
}
