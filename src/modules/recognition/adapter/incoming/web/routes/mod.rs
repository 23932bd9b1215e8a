mod admin;
mod public;

pub use admin::{
    create_recognition_handler, delete_recognition_handler, get_admin_recognitions_handler,
    update_recognition_handler,
};
pub use public::get_recognitions_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::recognition::application::ports::incoming::use_cases::RecognitionError;
use crate::shared::api::ApiResponse;

fn map_recognition_error(err: RecognitionError) -> HttpResponse {
    match err {
        RecognitionError::NotFound => {
            ApiResponse::not_found("RECOGNITION_NOT_FOUND", "Recognition not found")
        }
        RecognitionError::RepositoryError(e) => {
            error!(error = %e, "Recognition repository failure");
            ApiResponse::internal_error()
        }
    }
}
