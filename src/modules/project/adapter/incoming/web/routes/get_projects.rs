use actix_web::{get, web, HttpResponse};

use super::map_project_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/projects")]
pub async fn get_projects_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.project_use_case.list().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => map_project_error(e),
    }
}

#[get("/api/admin/projects")]
pub async fn get_admin_projects_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.project_use_case.list().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(e) => map_project_error(e),
    }
}
