use actix_web::{get, web, HttpResponse};

use super::map_stats_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/stats")]
pub async fn get_stats_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.stats_use_case.get_public().await {
        Ok(view) => ApiResponse::success(view),
        Err(e) => map_stats_error(e),
    }
}
