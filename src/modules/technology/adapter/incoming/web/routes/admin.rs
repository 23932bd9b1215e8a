use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::map_technology_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::technology::application::ports::incoming::use_cases::{
    TechnologyCommand, TechnologyInput,
};
use crate::AppState;

#[get("/api/admin/tech-stack")]
pub async fn get_admin_technologies_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.technology_use_case.list_all().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => map_technology_error(e),
    }
}

#[post("/api/admin/tech-stack")]
pub async fn create_technology_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<TechnologyInput>,
) -> HttpResponse {
    let command = match TechnologyCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.technology_use_case.create(command).await {
        Ok(technology) => {
            info!(technology_id = %technology.id, "Technology created");
            ApiResponse::created(technology)
        }
        Err(e) => map_technology_error(e),
    }
}

#[put("/api/admin/tech-stack/{id}")]
pub async fn update_technology_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<TechnologyInput>,
) -> HttpResponse {
    let command = match TechnologyCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data
        .technology_use_case
        .update(path.into_inner(), command)
        .await
    {
        Ok(technology) => ApiResponse::success(technology),
        Err(e) => map_technology_error(e),
    }
}

#[delete("/api/admin/tech-stack/{id}")]
pub async fn delete_technology_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.technology_use_case.delete(id).await {
        Ok(()) => {
            info!(technology_id = %id, "Technology deleted");
            ApiResponse::success(json!({ "message": "Technology deleted successfully" }))
        }
        Err(e) => map_technology_error(e),
    }
}
