use serde::Serialize;
use utoipa::ToSchema;

/// `{ "success": true, "data": ... }`
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// `{ "success": false, "error": { "code", "message" } }`
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine-readable code, e.g. `VALIDATION_ERROR` or `NOT_FOUND`
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// For validation failures, every violated rule joined with `, `
    #[schema(example = "Name is required, Email is invalid")]
    pub message: String,
}

/// Payload of admin deletions.
#[derive(Serialize, ToSchema)]
pub struct MessageBody {
    #[schema(example = "Contact message deleted successfully")]
    pub message: String,
}
