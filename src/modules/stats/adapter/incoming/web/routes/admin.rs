use actix_web::{get, put, web, HttpResponse};

use super::map_stats_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::stats::application::ports::incoming::use_cases::{StatsInput, UpdateStatsCommand};
use crate::AppState;

#[get("/api/admin/statistics")]
pub async fn get_admin_stats_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.stats_use_case.get_or_create().await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => map_stats_error(e),
    }
}

#[put("/api/admin/statistics")]
pub async fn update_stats_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    payload: web::Json<StatsInput>,
) -> HttpResponse {
    let command = match UpdateStatsCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.stats_use_case.upsert(command).await {
        Ok(stats) => ApiResponse::success(stats),
        Err(e) => map_stats_error(e),
    }
}
