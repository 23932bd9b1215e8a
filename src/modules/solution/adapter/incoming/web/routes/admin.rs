//! Admin handlers, mounted under both `/api/admin/solutions` and the
//! `/api/admin/services` paths the dashboard uses.

use actix_web::{routes, web, HttpResponse};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::map_solution_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::solution::application::ports::incoming::use_cases::{SolutionCommand, SolutionInput};
use crate::AppState;

#[routes]
#[get("/api/admin/solutions")]
#[get("/api/admin/services")]
pub async fn get_admin_solutions_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.solution_use_case.list().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => map_solution_error(e),
    }
}

#[routes]
#[post("/api/admin/solutions")]
#[post("/api/admin/services")]
pub async fn create_solution_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<SolutionInput>,
) -> HttpResponse {
    let command = match SolutionCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.solution_use_case.create(command).await {
        Ok(solution) => {
            info!(solution_id = %solution.id, "Solution created");
            ApiResponse::created(solution)
        }
        Err(e) => map_solution_error(e),
    }
}

#[routes]
#[put("/api/admin/solutions/{id}")]
#[put("/api/admin/services/{id}")]
pub async fn update_solution_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<SolutionInput>,
) -> HttpResponse {
    let command = match SolutionCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.solution_use_case.update(path.into_inner(), command).await {
        Ok(solution) => ApiResponse::success(solution),
        Err(e) => map_solution_error(e),
    }
}

#[routes]
#[delete("/api/admin/solutions/{id}")]
#[delete("/api/admin/services/{id}")]
pub async fn delete_solution_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.solution_use_case.delete(id).await {
        Ok(()) => {
            info!(solution_id = %id, "Solution deleted");
            ApiResponse::success(json!({ "message": "Solution deleted successfully" }))
        }
        Err(e) => map_solution_error(e),
    }
}
