use actix_web::{delete, get, post, web, HttpRequest, HttpResponse};
use serde_json::json;
use uuid::Uuid;

use super::map_resume_error;
use crate::auth::adapter::incoming::web::extractors::AdminSession;
use crate::media::adapter::incoming::web::routes::{map_upload_rejection, read_upload};
use crate::resume::application::ports::incoming::use_cases::{ResumeError, UploadResumeCommand};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/resume")]
pub async fn get_admin_resume_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.resume_use_case.get_active().await {
        Ok(resume) => ApiResponse::success(resume),
        Err(e) => map_resume_error(e),
    }
}

#[post("/api/admin/resume")]
pub async fn upload_resume_handler(
    session: AdminSession,
    req: HttpRequest,
    data: web::Data<AppState>,
    body: web::Bytes,
) -> HttpResponse {
    let upload = match read_upload(&req, body).await {
        Ok(upload) => upload,
        Err(resp) => return resp,
    };

    let command = match UploadResumeCommand::new(
        &data.upload_policy,
        upload.file,
        &session.admin.email,
    ) {
        Ok(c) => c,
        Err(rejection) => return map_upload_rejection(rejection),
    };

    match data.resume_use_case.upload(command).await {
        Ok(resume) => ApiResponse::created(resume),
        Err(e) => map_resume_error(e),
    }
}

#[delete("/api/admin/resume/{id}")]
pub async fn delete_resume_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let Ok(id) = Uuid::parse_str(&path.into_inner()) else {
        return map_resume_error(ResumeError::NotFound);
    };

    match data.resume_use_case.delete(id).await {
        Ok(()) => ApiResponse::success(json!({ "message": "Resume deleted successfully" })),
        Err(e) => map_resume_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::adapter::incoming::web::routes::get_resume_handler;
    use crate::tests::support::{
        admin_test_app,
        app_state_builder::TestAppStateBuilder,
        auth_helper::bearer,
        fixtures::{multipart_form, FormPart},
        stubs::StubResumeUseCase,
    };
    use actix_web::test;

    macro_rules! app {
        ($stub:expr) => {
            admin_test_app!(
                TestAppStateBuilder::default().with_resume($stub).build(),
                get_resume_handler,
                get_admin_resume_handler,
                upload_resume_handler,
                delete_resume_handler,
            )
        };
    }

    fn upload(name: &str, content_type: &str, body: &'static [u8]) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/admin/resume")
            .insert_header(bearer())
            .insert_header(("Content-Type", content_type.to_string()))
            .insert_header(("X-File-Name", name.to_string()))
            .set_payload(body)
    }

    #[actix_web::test]
    async fn public_resume_is_null_before_upload() {
        let app = app!(StubResumeUseCase::default()).await;

        let req = test::TestRequest::get().uri("/api/resume").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(json["success"], true);
        assert!(json["data"].is_null());
    }

    #[actix_web::test]
    async fn uploaded_pdf_becomes_active() {
        let app = app!(StubResumeUseCase::default()).await;

        let resp = test::call_service(&app, upload("cv.pdf", "application/pdf", b"%PDF-1.4").to_request()).await;
        assert_eq!(resp.status(), 201);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["fileName"], "cv.pdf");
        assert_eq!(json["data"]["isActive"], true);

        let req = test::TestRequest::get().uri("/api/resume").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["fileName"], "cv.pdf");
        assert_eq!(json["data"]["publicId"], "resume/cv.pdf");
    }

    #[actix_web::test]
    async fn multipart_pdf_becomes_active() {
        let app = app!(StubResumeUseCase::default()).await;

        let (content_type, body) = multipart_form(&[FormPart::File {
            name: "file",
            file_name: "Anirban-CV.pdf",
            content_type: "application/pdf",
            bytes: b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n",
        }]);
        let req = test::TestRequest::post()
            .uri("/api/admin/resume")
            .insert_header(bearer())
            .insert_header(("Content-Type", content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["data"]["fileName"], "Anirban-CV.pdf");
        assert_eq!(json["data"]["isActive"], true);
    }

    #[actix_web::test]
    async fn multipart_image_is_415() {
        let app = app!(StubResumeUseCase::default()).await;

        let (content_type, body) = multipart_form(&[FormPart::File {
            name: "file",
            file_name: "cv.png",
            content_type: "image/png",
            bytes: b"\x89PNG",
        }]);
        let req = test::TestRequest::post()
            .uri("/api/admin/resume")
            .insert_header(bearer())
            .insert_header(("Content-Type", content_type))
            .set_payload(body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 415);
    }

    #[actix_web::test]
    async fn image_upload_is_415() {
        let app = app!(StubResumeUseCase::default()).await;

        let resp = test::call_service(&app, upload("cv.png", "image/png", b"\x89PNG").to_request()).await;

        assert_eq!(resp.status(), 415);
    }

    #[actix_web::test]
    async fn pdf_without_signature_is_415() {
        let app = app!(StubResumeUseCase::default()).await;

        let resp = test::call_service(&app, upload("cv.pdf", "application/pdf", b"<html>").to_request()).await;

        assert_eq!(resp.status(), 415);
    }

    #[actix_web::test]
    async fn delete_unknown_resume_is_404() {
        let app = app!(StubResumeUseCase::default()).await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/resume/{}", Uuid::new_v4()))
            .insert_header(bearer())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
        let json: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(json["error"]["code"], "RESUME_NOT_FOUND");
    }

    #[actix_web::test]
    async fn delete_removes_active_resume() {
        let app = app!(StubResumeUseCase::default()).await;

        let resp = test::call_service(&app, upload("cv.pdf", "application/pdf", b"%PDF-1.4").to_request()).await;
        let json: serde_json::Value = test::read_body_json(resp).await;
        let id = json["data"]["id"].as_str().unwrap().to_string();

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/resume/{id}"))
            .insert_header(bearer())
            .to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(json["data"]["message"], "Resume deleted successfully");

        let req = test::TestRequest::get().uri("/api/resume").to_request();
        let json: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert!(json["data"].is_null());
    }

    #[actix_web::test]
    async fn admin_routes_require_session() {
        let app = app!(StubResumeUseCase::default()).await;

        let req = test::TestRequest::get().uri("/api/admin/resume").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 401);
    }
}
