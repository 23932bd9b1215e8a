use actix_web::{get, web, HttpResponse};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::dashboard::application::ports::incoming::use_cases::DashboardError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/overview")]
pub async fn get_overview_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.dashboard_use_case.overview().await {
        Ok(overview) => ApiResponse::success(overview),
        Err(DashboardError::QueryError(e)) => {
            error!(error = %e, "Failed to load admin overview");
            ApiResponse::internal_error()
        }
    }
}
