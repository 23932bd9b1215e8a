use actix_web::{get, web, HttpResponse};

use super::map_social_link_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/social-links")]
pub async fn get_social_links_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.social_link_use_case.list_active().await {
        Ok(links) => ApiResponse::success(links),
        Err(e) => map_social_link_error(e),
    }
}
