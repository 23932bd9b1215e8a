mod admin;
mod public;

pub use admin::{
    create_testimonial_handler, delete_testimonial_handler, get_admin_testimonials_handler,
    update_testimonial_handler,
};
pub use public::get_testimonials_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::shared::api::ApiResponse;
use crate::testimonial::application::ports::incoming::use_cases::TestimonialError;

fn map_testimonial_error(err: TestimonialError) -> HttpResponse {
    match err {
        TestimonialError::NotFound => {
            ApiResponse::not_found("TESTIMONIAL_NOT_FOUND", "Testimonial not found")
        }
        TestimonialError::RepositoryError(e) => {
            error!(error = %e, "Testimonial repository failure");
            ApiResponse::internal_error()
        }
    }
}
