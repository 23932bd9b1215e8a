pub mod admin;
pub mod submit_contact;

pub use admin::{
    delete_contact_message_handler, get_contact_messages_handler,
    update_contact_message_handler, ContactListQuery, ContactStatusRequestDto,
};
pub use submit_contact::{submit_contact_handler, ContactFormDto, ContactSubmittedDto};

use actix_web::HttpResponse;
use tracing::error;

use crate::contact::application::ports::incoming::use_cases::ContactError;
use crate::shared::api::ApiResponse;

fn map_contact_error(err: ContactError) -> HttpResponse {
    match err {
        ContactError::NotFound => {
            ApiResponse::not_found("CONTACT_MESSAGE_NOT_FOUND", "Contact message not found")
        }
        ContactError::RepositoryError(e) => {
            error!(error = %e, "Contact repository failure");
            ApiResponse::internal_error()
        }
    }
}
