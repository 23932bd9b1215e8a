mod admin;
mod public;

pub use admin::{get_admin_hero_handler, update_hero_handler};
pub use public::get_hero_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::hero::application::ports::incoming::use_cases::HeroError;
use crate::shared::api::ApiResponse;

fn map_hero_error(err: HeroError) -> HttpResponse {
    match err {
        HeroError::RepositoryError(e) => {
            error!(error = %e, "Hero repository failure");
            ApiResponse::internal_error()
        }
    }
}
