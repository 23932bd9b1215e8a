use actix_web::{get, web, HttpResponse};

use super::map_resume_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Active resume, `data: null` when none has been uploaded.
#[get("/api/resume")]
pub async fn get_resume_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.resume_use_case.get_active().await {
        Ok(resume) => ApiResponse::success(resume),
        Err(e) => map_resume_error(e),
    }
}
