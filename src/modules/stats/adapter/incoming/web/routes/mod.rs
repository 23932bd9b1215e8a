mod admin;
mod public;

pub use admin::{get_admin_stats_handler, update_stats_handler};
pub use public::get_stats_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::stats::application::ports::incoming::use_cases::StatsError;

fn map_stats_error(err: StatsError) -> HttpResponse {
    let StatsError::RepositoryError(e) = err;
    error!(error = %e, "Stats repository failure");
    ApiResponse::internal_error()
}
