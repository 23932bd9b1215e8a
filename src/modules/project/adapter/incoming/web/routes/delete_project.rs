use actix_web::{delete, web, HttpResponse};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::map_project_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.project_use_case.delete(id).await {
        Ok(()) => {
            info!(project_id = %id, "Project deleted");
            ApiResponse::success(json!({ "message": "Project deleted successfully" }))
        }
        Err(e) => map_project_error(e),
    }
}
