use actix_web::{get, web, HttpResponse};

use super::map_hero_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Seeds the default hero on an empty store, unlike about and stats.
#[get("/api/hero")]
pub async fn get_hero_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.hero_use_case.get().await {
        Ok(hero) => ApiResponse::success(hero),
        Err(e) => map_hero_error(e),
    }
}
