use actix_web::{put, web, HttpResponse};
use uuid::Uuid;

use super::map_project_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::project::application::ports::incoming::use_cases::{ProjectCommand, ProjectInput};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[put("/api/admin/projects/{id}")]
pub async fn update_project_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<Uuid>,
    payload: web::Json<ProjectInput>,
) -> HttpResponse {
    let command = match ProjectCommand::new(payload.into_inner()) {
        Ok(c) => c,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };

    match data.project_use_case.update(path.into_inner(), command).await {
        Ok(project) => ApiResponse::success(project),
        Err(e) => map_project_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{
        app_state_builder::TestAppStateBuilder,
        auth_helper::{bearer, session_verifier},
        fixtures::sample_project,
        stubs::StubProjectUseCase,
    };
    use actix_web::{test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn replaces_existing_project() {
        let existing = sample_project("Old title");
        let state = TestAppStateBuilder::default()
            .with_project(StubProjectUseCase::with(vec![existing.clone()]))
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(session_verifier()))
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/projects/{}", existing.id))
            .insert_header(bearer())
            .set_json(json!({ "title": "New title", "description": "Updated" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["id"], existing.id.to_string());
        assert_eq!(json["data"]["title"], "New title");
    }

    #[actix_web::test]
    async fn unknown_id_is_404() {
        let state = TestAppStateBuilder::default()
            .with_project(StubProjectUseCase::default())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(session_verifier()))
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri(&format!("/api/admin/projects/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .set_json(json!({ "title": "t", "description": "d" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
