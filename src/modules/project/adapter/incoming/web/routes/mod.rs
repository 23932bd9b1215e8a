mod create_project;
mod delete_project;
mod get_projects;
mod update_project;

pub use create_project::create_project_handler;
pub use delete_project::delete_project_handler;
pub use get_projects::{get_admin_projects_handler, get_projects_handler};
pub use update_project::update_project_handler;

use actix_web::HttpResponse;
use tracing::error;

use crate::project::application::ports::incoming::use_cases::ProjectError;
use crate::shared::api::ApiResponse;

pub(crate) fn map_project_error(err: ProjectError) -> HttpResponse {
    match err {
        ProjectError::NotFound => ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found"),
        ProjectError::RepositoryError(e) => {
            error!(error = %e, "Project repository failure");
            ApiResponse::internal_error()
        }
    }
}
