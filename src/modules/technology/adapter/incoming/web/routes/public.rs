use actix_web::{get, web, HttpResponse};

use super::map_technology_error;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/tech-stack")]
pub async fn get_tech_stack_handler(data: web::Data<AppState>) -> HttpResponse {
    match data.technology_use_case.list_active().await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => map_technology_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder, fixtures::sample_technology,
        stubs::StubTechnologyUseCase,
    };
    use actix_web::{test, App};

    #[actix_web::test]
    async fn public_stack_hides_inactive_entries() {
        let mut retired = sample_technology("jQuery");
        retired.is_active = false;
        let state = TestAppStateBuilder::default()
            .with_technology(StubTechnologyUseCase::with(vec![
                sample_technology("Rust"),
                retired,
            ]))
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(get_tech_stack_handler)).await;

        let req = test::TestRequest::get().uri("/api/tech-stack").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let list = json["data"].as_array().unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0]["name"], "Rust");
        assert_eq!(list[0]["category"], "Backend");
    }
}
