mod admin;
mod public;

pub use admin::{delete_resume_handler, get_admin_resume_handler, upload_resume_handler};
pub use public::get_resume_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::media::adapter::incoming::web::routes::media_upload_failed;
use crate::resume::application::ports::incoming::use_cases::ResumeError;
use crate::shared::api::ApiResponse;

fn map_resume_error(err: ResumeError) -> HttpResponse {
    match err {
        ResumeError::NotFound => ApiResponse::not_found("RESUME_NOT_FOUND", "Resume not found"),
        ResumeError::MediaError(e) => {
            error!(error = %e, "Media host failure for resume");
            media_upload_failed()
        }
        ResumeError::RepositoryError(e) => {
            error!(error = %e, "Resume repository failure");
            ApiResponse::internal_error()
        }
    }
}
