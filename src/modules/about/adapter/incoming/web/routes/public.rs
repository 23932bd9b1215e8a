use actix_web::{get, web, HttpResponse};

use super::map_about_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/about")]
pub async fn get_about_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.about_use_case.get_public().await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => map_about_error(e),
    }
}
