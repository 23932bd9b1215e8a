use actix_web::{routes, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::map_newsletter_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::newsletter::application::ports::incoming::use_cases::SubscribeCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SubscribeRequestDto {
    #[schema(example = "reader@example.com")]
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct SubscribedDto {
    pub id: Uuid,
    #[schema(example = "Successfully subscribed to newsletter!")]
    pub message: String,
}

/// Subscribe to the newsletter
///
/// Also served at `/api/subscribe`.
#[utoipa::path(
    post,
    path = "/api/newsletter",
    tag = "newsletter",
    request_body = SubscribeRequestDto,
    responses(
        (status = 201, description = "Subscribed", body = inline(SuccessResponse<SubscribedDto>)),
        (status = 400, description = "Missing or malformed email", body = ErrorResponse),
        (status = 409, description = "Email already subscribed", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "ALREADY_SUBSCRIBED", "message": "Email is already subscribed to our newsletter" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[routes]
#[post("/api/newsletter")]
#[post("/api/subscribe")]
pub async fn subscribe_handler(
    data: web::Data<AppState>,
    payload: web::Json<SubscribeRequestDto>,
) -> HttpResponse {
    let command = match SubscribeCommand::new(&payload.email) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.newsletter_use_case.subscribe(command).await {
        Ok(subscriber) => ApiResponse::created(SubscribedDto {
            id: subscriber.id,
            message: "Successfully subscribed to newsletter!".to_string(),
        }),
        Err(e) => map_newsletter_error(e),
    }
}
