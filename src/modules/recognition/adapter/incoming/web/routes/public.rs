use actix_web::{get, web, HttpResponse};

use super::map_recognition_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/recognitions")]
pub async fn get_recognitions_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.recognition_use_case.list().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => map_recognition_error(e),
    }
}
