mod admin;
mod public;

pub use admin::{
    create_social_link_handler, delete_social_link_handler, get_admin_social_links_handler,
    update_social_link_handler,
};
pub use public::get_social_links_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::social_link::application::ports::incoming::use_cases::SocialLinkError;

fn map_social_link_error(err: SocialLinkError) -> HttpResponse {
    match err {
        SocialLinkError::NotFound => {
            ApiResponse::not_found("SOCIAL_LINK_NOT_FOUND", "Social link not found")
        }
        SocialLinkError::RepositoryError(e) => {
            error!(error = %e, "Social link repository failure");
            ApiResponse::internal_error()
        }
    }
}
