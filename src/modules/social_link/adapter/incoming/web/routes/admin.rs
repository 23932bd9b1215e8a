use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::map_social_link_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::social_link::application::ports::incoming::use_cases::{
    SocialLinkCommand, SocialLinkInput,
};
use crate::AppState;

#[get("/api/admin/social-links")]
pub async fn get_admin_social_links_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.social_link_use_case.list().await {
        Ok(links) => ApiResponse::success(links),
        Err(e) => map_social_link_error(e),
    }
}

#[post("/api/admin/social-links")]
pub async fn create_social_link_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<SocialLinkInput>,
) -> HttpResponse {
    let command = match SocialLinkCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.social_link_use_case.create(command).await {
        Ok(link) => {
            info!(social_link_id = %link.id, platform = %link.platform, "Social link created");
            ApiResponse::created(link)
        }
        Err(e) => map_social_link_error(e),
    }
}

#[put("/api/admin/social-links/{id}")]
pub async fn update_social_link_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<SocialLinkInput>,
) -> HttpResponse {
    let command = match SocialLinkCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data
        .social_link_use_case
        .update(path.into_inner(), command)
        .await
    {
        Ok(link) => ApiResponse::success(link),
        Err(e) => map_social_link_error(e),
    }
}

#[delete("/api/admin/social-links/{id}")]
pub async fn delete_social_link_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.social_link_use_case.delete(id).await {
        Ok(()) => ApiResponse::success(json!({ "message": "Social link deleted successfully" })),
        Err(e) => map_social_link_error(e),
    }
}
