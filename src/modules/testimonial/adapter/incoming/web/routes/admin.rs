use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use super::map_testimonial_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::testimonial::application::ports::incoming::use_cases::{
    TestimonialCommand, TestimonialInput,
};
use crate::AppState;

#[get("/api/admin/testimonials")]
pub async fn get_admin_testimonials_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.testimonial_use_case.list().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => map_testimonial_error(e),
    }
}

#[post("/api/admin/testimonials")]
pub async fn create_testimonial_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<TestimonialInput>,
) -> HttpResponse {
    let command = match TestimonialCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.testimonial_use_case.create(command).await {
        Ok(created) => {
            info!(testimonial_id = %created.id, "Testimonial created");
            ApiResponse::created(created)
        }
        Err(e) => map_testimonial_error(e),
    }
}

#[put("/api/admin/testimonials/{id}")]
pub async fn update_testimonial_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<TestimonialInput>,
) -> HttpResponse {
    let command = match TestimonialCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data
        .testimonial_use_case
        .update(path.into_inner(), command)
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => map_testimonial_error(e),
    }
}

#[delete("/api/admin/testimonials/{id}")]
pub async fn delete_testimonial_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.testimonial_use_case.delete(id).await {
        Ok(()) => {
            info!(testimonial_id = %id, "Testimonial deleted");
            ApiResponse::success(json!({ "message": "Testimonial deleted successfully" }))
        }
        Err(e) => map_testimonial_error(e),
    }
}
