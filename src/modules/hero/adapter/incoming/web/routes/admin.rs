use actix_web::{get, put, web, HttpResponse};
use tracing::info;

use super::map_hero_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::hero::application::ports::incoming::use_cases::{HeroInput, UpdateHeroCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/hero")]
pub async fn get_admin_hero_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.hero_use_case.get().await {
        Ok(hero) => ApiResponse::success(hero),
        Err(e) => map_hero_error(e),
    }
}

#[put("/api/admin/hero")]
pub async fn update_hero_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<HeroInput>,
) -> HttpResponse {
    let command = UpdateHeroCommand::new(payload.into_inner());

    match data.hero_use_case.upsert(command).await {
        Ok(hero) => {
            info!(hero_id = %hero.id, "Hero section updated");
            ApiResponse::success(hero)
        }
        Err(e) => map_hero_error(e),
    }
}
