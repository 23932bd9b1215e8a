use actix_web::{get, web, HttpResponse};

use super::map_solution_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/solutions")]
pub async fn get_solutions_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.solution_use_case.list_active().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => map_solution_error(e),
    }
}
