mod admin;
mod public;

pub use admin::{
    create_solution_handler, delete_solution_handler, get_admin_solutions_handler,
    update_solution_handler,
};
pub use public::get_solutions_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::solution::application::ports::incoming::use_cases::SolutionError;

fn map_solution_error(err: SolutionError) -> HttpResponse {
    match err {
        SolutionError::NotFound => ApiResponse::not_found("SOLUTION_NOT_FOUND", "Solution not found"),
        SolutionError::RepositoryError(e) => {
            error!(error = %e, "Solution repository failure");
            ApiResponse::internal_error()
        }
    }
}
