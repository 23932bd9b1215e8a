mod admin;
mod public;

pub use admin::{get_admin_about_handler, update_about_handler};
pub use public::get_about_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::about::application::ports::incoming::use_cases::AboutError;
use crate::shared::api::ApiResponse;

fn map_about_error(err: AboutError) -> HttpResponse {
    let AboutError::RepositoryError(e) = err;
    error!(error = %e, "About repository failure");
    ApiResponse::internal_error()
}
