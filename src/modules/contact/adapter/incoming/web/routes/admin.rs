use actix_web::{delete, get, patch, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::map_contact_error;
use crate::api::schemas::{ErrorResponse, MessageBody, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::contact::application::domain::entities::{ContactFilter, ContactStatus};
use crate::contact::application::ports::incoming::use_cases::UpdateContactStatusCommand;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ContactListQuery {
    /// Case-insensitive match on name, email, subject or message
    pub search: Option<String>,
    /// One of `new`, `read`, `replied`
    pub status: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactStatusRequestDto {
    #[schema(example = "read")]
    pub status: Option<String>,
    pub is_read: Option<bool>,
}

/// List contact messages
#[utoipa::path(
    get,
    path = "/api/admin/contact-messages",
    tag = "contact",
    params(ContactListQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Messages newest first, with total and unread counts"),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/admin/contact-messages")]
pub async fn get_contact_messages_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    query: web::Query<ContactListQuery>,
) -> HttpResponse {
    let query = query.into_inner();

    let status = match query.status.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match ContactStatus::parse(raw) {
            Some(s) => Some(s),
            None => {
                return ApiResponse::validation_error("Status must be one of: new, read, replied")
            }
        },
        None => None,
    };

    let filter = ContactFilter {
        search: query.search.filter(|s| !s.trim().is_empty()),
        status,
    };

    match data.contact_use_case.list(filter).await {
        Ok(inbox) => ApiResponse::success(inbox),
        Err(e) => map_contact_error(e),
    }
}

/// Change a message's status or read flag
#[utoipa::path(
    patch,
    path = "/api/admin/contact-messages/{id}",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Contact message id")),
    request_body = ContactStatusRequestDto,
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Updated message"),
        (status = 400, description = "Invalid status", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[patch("/api/admin/contact-messages/{id}")]
pub async fn update_contact_message_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<ContactStatusRequestDto>,
) -> HttpResponse {
    let body = payload.into_inner();

    let command = match UpdateContactStatusCommand::new(body.status.as_deref(), body.is_read) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data
        .contact_use_case
        .update_status(path.into_inner(), command)
        .await
    {
        Ok(message) => ApiResponse::success(message),
        Err(e) => map_contact_error(e),
    }
}

/// Delete a contact message
#[utoipa::path(
    delete,
    path = "/api/admin/contact-messages/{id}",
    tag = "contact",
    params(("id" = Uuid, Path, description = "Contact message id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Message deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Message not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/contact-messages/{id}")]
pub async fn delete_contact_message_handler(
    session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.contact_use_case.delete(id).await {
        Ok(()) => {
            info!(contact_id = %id, admin = %session.admin.email, "Contact message removed");
            ApiResponse::success(json!({ "message": "Contact message deleted successfully" }))
        }
        Err(e) => map_contact_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{
        admin_test_app, app_state_builder::TestAppStateBuilder, auth_helper::bearer,
        fixtures::sample_contact_message, stubs::StubContactUseCase,
    };
    use actix_web::test;

    macro_rules! app {
        ($stub:expr) => {
            admin_test_app!(
                TestAppStateBuilder::default().with_contact($stub).build(),
                get_contact_messages_handler,
                update_contact_message_handler,
                delete_contact_message_handler,
            )
        };
    }

    #[actix_web::test]
    async fn list_reports_total_and_unread() {
        let mut read = sample_contact_message("Read One");
        read.is_read = true;
        read.status = ContactStatus::Read;
        let stub = StubContactUseCase::with(vec![sample_contact_message("Unread"), read]);
        let app = app!(stub).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/contact-messages")
            .insert_header(bearer())
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["data"]["total"], 2);
        assert_eq!(json["data"]["unread"], 1);
        assert_eq!(json["data"]["messages"][0]["name"], "Unread");
    }

    #[actix_web::test]
    async fn list_filters_by_status_and_search() {
        let mut replied = sample_contact_message("Replied Person");
        replied.status = ContactStatus::Replied;
        let stub = StubContactUseCase::with(vec![sample_contact_message("Alice"), replied]);
        let app = app!(stub).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/contact-messages?status=replied")
            .insert_header(bearer())
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["messages"][0]["status"], "replied");

        let req = test::TestRequest::get()
            .uri("/api/admin/contact-messages?search=alice")
            .insert_header(bearer())
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["total"], 1);
        assert_eq!(json["data"]["messages"][0]["name"], "Alice");
    }

    #[actix_web::test]
    async fn unknown_status_filter_is_400() {
        let app = app!(StubContactUseCase::default()).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/contact-messages?status=archived")
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn list_requires_session() {
        let app = app!(StubContactUseCase::default()).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/contact-messages")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }

    #[actix_web::test]
    async fn marking_read_sets_flag() {
        let message = sample_contact_message("Alice");
        let id = message.id;
        let app = app!(StubContactUseCase::with(vec![message])).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/contact-messages/{id}"))
            .insert_header(bearer())
            .set_json(json!({ "status": "read" }))
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["data"]["status"], "read");
        assert_eq!(json["data"]["isRead"], true);
    }

    #[actix_web::test]
    async fn patch_unknown_id_is_404() {
        let app = app!(StubContactUseCase::default()).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/admin/contact-messages/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .set_json(json!({ "isRead": true }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "CONTACT_MESSAGE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn delete_then_delete_again() {
        let message = sample_contact_message("Alice");
        let id = message.id;
        let app = app!(StubContactUseCase::with(vec![message])).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/contact-messages/{id}"))
            .insert_header(bearer())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/contact-messages/{id}"))
            .insert_header(bearer())
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }
}
