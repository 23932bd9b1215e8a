use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::map_recognition_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::recognition::application::ports::incoming::use_cases::{
    RecognitionCommand, RecognitionInput,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/recognitions")]
pub async fn get_admin_recognitions_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.recognition_use_case.list().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => map_recognition_error(e),
    }
}

#[post("/api/admin/recognitions")]
pub async fn create_recognition_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<RecognitionInput>,
) -> HttpResponse {
    let command = match RecognitionCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.recognition_use_case.create(command).await {
        Ok(recognition) => {
            info!(recognition_id = %recognition.id, "Recognition created");
            ApiResponse::created(recognition)
        }
        Err(e) => map_recognition_error(e),
    }
}

#[put("/api/admin/recognitions/{id}")]
pub async fn update_recognition_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<RecognitionInput>,
) -> HttpResponse {
    let command = match RecognitionCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data
        .recognition_use_case
        .update(path.into_inner(), command)
        .await
    {
        Ok(recognition) => ApiResponse::success(recognition),
        Err(e) => map_recognition_error(e),
    }
}

#[delete("/api/admin/recognitions/{id}")]
pub async fn delete_recognition_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.recognition_use_case.delete(id).await {
        Ok(()) => {
            info!(recognition_id = %id, "Recognition deleted");
            ApiResponse::success(json!({ "message": "Recognition deleted successfully" }))
        }
        Err(e) => map_recognition_error(e),
    }
}
