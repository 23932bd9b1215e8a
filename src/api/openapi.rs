use crate::api::schemas::{ErrorDetail, ErrorResponse, MessageBody, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

// Auth
use crate::auth::adapter::incoming::web::routes::{
    get_session::SessionResponse,
    login_admin::{AdminDto, LoginRequestDto, LoginResponseDto},
    logout_admin::LogoutResponse,
};
// Inbox
use crate::contact::adapter::incoming::web::routes::{
    ContactFormDto, ContactStatusRequestDto, ContactSubmittedDto,
};
use crate::newsletter::adapter::incoming::web::routes::{SubscribeRequestDto, SubscribedDto};
// Media
use crate::media::adapter::incoming::web::routes::UploadedMediaDto;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio CMS API",
        version = "1.0.0",
        description = "Public content and admin management endpoints for the portfolio site",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Auth endpoints
        crate::auth::adapter::incoming::web::routes::login_admin::login_admin_handler,
        crate::auth::adapter::incoming::web::routes::logout_admin::logout_admin_handler,
        crate::auth::adapter::incoming::web::routes::get_session::get_session_handler,

        // Contact endpoints
        crate::contact::adapter::incoming::web::routes::submit_contact::submit_contact_handler,
        crate::contact::adapter::incoming::web::routes::admin::get_contact_messages_handler,
        crate::contact::adapter::incoming::web::routes::admin::update_contact_message_handler,
        crate::contact::adapter::incoming::web::routes::admin::delete_contact_message_handler,

        // Newsletter endpoints
        crate::newsletter::adapter::incoming::web::routes::subscribe::subscribe_handler,
        crate::newsletter::adapter::incoming::web::routes::admin::get_subscribers_handler,
        crate::newsletter::adapter::incoming::web::routes::admin::delete_subscriber_handler,

        // Media endpoints
        crate::media::adapter::incoming::web::routes::upload_media::upload_media_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<LoginResponseDto>,
            ErrorResponse,
            ErrorDetail,
            MessageBody,

            // Auth DTOs
            LoginRequestDto,
            LoginResponseDto,
            AdminDto,
            LogoutResponse,
            SessionResponse,

            // Inbox DTOs
            ContactFormDto,
            ContactSubmittedDto,
            ContactStatusRequestDto,
            SubscribeRequestDto,
            SubscribedDto,

            // Media DTOs
            UploadedMediaDto
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Admin session endpoints"),
        (name = "contact", description = "Contact form and admin inbox"),
        (name = "newsletter", description = "Newsletter signup and subscriber management"),
        (name = "media", description = "Image uploads to the media host"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Session token from POST /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
