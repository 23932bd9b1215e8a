use actix_web::{post, web, HttpResponse};
use tracing::info;

use super::map_project_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::project::application::ports::incoming::use_cases::{ProjectCommand, ProjectInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[post("/api/admin/projects")]
pub async fn create_project_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<ProjectInput>,
) -> HttpResponse {
    let command = match ProjectCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project_use_case.create(command).await {
        Ok(project) => {
            info!(project_id = %project.id, "Project created");
            ApiResponse::created(project)
        }
        Err(e) => map_project_error(e),
    }
}
