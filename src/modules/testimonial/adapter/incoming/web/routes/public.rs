use actix_web::{get, web, HttpResponse};

use super::map_testimonial_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/testimonials")]
pub async fn get_testimonials_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.testimonial_use_case.list().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => map_testimonial_error(e),
    }
}
