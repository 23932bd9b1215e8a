mod admin;
mod public;

pub use admin::{
    create_technology_handler, delete_technology_handler, get_admin_technologies_handler,
    update_technology_handler,
};
pub use public::get_tech_stack_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::technology::application::ports::incoming::use_cases::TechnologyError;

fn map_technology_error(err: TechnologyError) -> HttpResponse {
    match err {
        TechnologyError::NotFound => {
            ApiResponse::not_found("TECHNOLOGY_NOT_FOUND", "Technology not found")
        }
        TechnologyError::RepositoryError(e) => {
            error!(error = %e, "Technology repository failure");
            ApiResponse::internal_error()
        }
    }
}
