use actix_web::{delete, get, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use utoipa::IntoParams;
use uuid::Uuid;

use super::map_newsletter_error;
use crate::api::schemas::{ErrorResponse, MessageBody, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SubscriberListQuery {
    /// Case-insensitive match on the email address
    pub search: Option<String>,
}

/// List newsletter subscribers
#[utoipa::path(
    get,
    path = "/api/admin/newsletter-subscribers",
    tag = "newsletter",
    params(SubscriberListQuery),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Subscribers newest first, with total"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
    )
)]
#[get("/api/admin/newsletter-subscribers")]
pub async fn get_subscribers_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    query: web::Query<SubscriberListQuery>,
) -> HttpResponse {
    match data
        .newsletter_use_case
        .list(query.into_inner().search)
        .await
    {
        Ok(list) => ApiResponse::success(list),
        Err(e) => map_newsletter_error(e),
    }
}

/// Remove a subscriber
#[utoipa::path(
    delete,
    path = "/api/admin/newsletter-subscribers/{id}",
    tag = "newsletter",
    params(("id" = Uuid, Path, description = "Subscriber id")),
    security(("BearerAuth" = [])),
    responses(
        (status = 200, description = "Subscriber deleted", body = inline(SuccessResponse<MessageBody>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 404, description = "Subscriber not found", body = ErrorResponse),
    )
)]
#[delete("/api/admin/newsletter-subscribers/{id}")]
pub async fn delete_subscriber_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> HttpResponse {
    let id = path.into_inner();

    match data.newsletter_use_case.delete(id).await {
        Ok(()) => {
            info!(subscriber_id = %id, "Subscriber removed by admin");
            ApiResponse::success(json!({ "message": "Subscriber deleted successfully" }))
        }
        Err(e) => map_newsletter_error(e),
    }
}
