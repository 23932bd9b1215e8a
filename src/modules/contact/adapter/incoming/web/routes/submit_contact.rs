use actix_web::{post, web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::map_contact_error;
use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::contact::application::ports::incoming::use_cases::SubmitContactCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ContactFormDto {
    #[schema(example = "Jane Doe")]
    pub name: String,
    #[schema(example = "jane@example.com")]
    pub email: String,
    pub phone: Option<String>,
    #[schema(example = "Project inquiry")]
    pub subject: Option<String>,
    #[schema(example = "I'd like to talk about a new web app.")]
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct ContactSubmittedDto {
    pub id: Uuid,
    #[schema(example = "Your message has been sent successfully!")]
    pub message: String,
}

/// Submit the public contact form
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "contact",
    request_body = ContactFormDto,
    responses(
        (status = 201, description = "Message stored", body = inline(SuccessResponse<ContactSubmittedDto>)),
        (status = 400, description = "Missing or invalid fields", body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "Name, email, and message are required fields" }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/contact")]
pub async fn submit_contact_handler(
    data: web::Data<AppState>,
    payload: web::Json<ContactFormDto>,
) -> HttpResponse {
    let form = payload.into_inner();

    let command = match SubmitContactCommand::new(
        &form.name,
        &form.email,
        form.phone.as_deref(),
        form.subject.as_deref(),
        &form.message,
    ) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.contact_use_case.submit(command).await {
        Ok(id) => ApiResponse::created(ContactSubmittedDto {
            id,
            message: "Your message has been sent successfully!".to_string(),
        }),
        Err(e) => map_contact_error(e),
    }
}
