pub mod admin;
pub mod subscribe;

pub use admin::{
    delete_subscriber_handler, get_subscribers_handler, SubscriberListQuery,
};
pub use subscribe::{subscribe_handler, SubscribeRequestDto, SubscribedDto};

use actix_web::HttpResponse;
use tracing::error;

use crate::newsletter::application::ports::incoming::use_cases::NewsletterError;
use crate::shared::api::ApiResponse;

fn map_newsletter_error(err: NewsletterError) -> HttpResponse {
    match err {
        NewsletterError::AlreadySubscribed => ApiResponse::conflict(
            "ALREADY_SUBSCRIBED",
            "Email is already subscribed to our newsletter",
        ),
        NewsletterError::NotFound => {
            ApiResponse::not_found("SUBSCRIBER_NOT_FOUND", "Subscriber not found")
        }
        NewsletterError::RepositoryError(e) => {
            error!(error = %e, "Newsletter repository failure");
            ApiResponse::internal_error()
        }
    }
}
