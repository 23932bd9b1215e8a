use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use futures::future::LocalBoxFuture;

use crate::auth::application::{
    domain::entities::AdminIdentity,
    ports::outgoing::TokenError,
    services::{SessionError, SessionVerifier},
};
use crate::shared::api::ApiResponse;

pub const SESSION_COOKIE: &str = "admin_session";

/// An authenticated, non-revoked admin session. Put it in a handler's
/// arguments to guard the route.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub admin: AdminIdentity,
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

impl FromRequest for AdminSession {
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let verifier = req.app_data::<web::Data<SessionVerifier>>().cloned();
        let token = extract_session_token(req);

        Box::pin(async move {
            let Some(verifier) = verifier else {
                tracing::error!("SessionVerifier is not registered as app data");
                return Err(create_api_error(ApiResponse::internal_error()));
            };

            let Some(token) = token else {
                return Err(create_api_error(ApiResponse::unauthorized(
                    "UNAUTHORIZED",
                    "Authentication required",
                )));
            };

            match verifier.verify(&token).await {
                Ok(claims) => Ok(AdminSession {
                    admin: claims.admin(),
                    expires_at: claims.expires_at(),
                    token,
                }),
                Err(err) => Err(create_api_error(map_session_error(err))),
            }
        })
    }
}

fn map_session_error(err: SessionError) -> HttpResponse {
    match err {
        SessionError::Invalid(TokenError::TokenExpired) => {
            ApiResponse::unauthorized("SESSION_EXPIRED", "Session has expired")
        }
        SessionError::Invalid(_) => {
            ApiResponse::unauthorized("INVALID_SESSION", "Invalid or expired session")
        }
        SessionError::Revoked => {
            ApiResponse::unauthorized("SESSION_REVOKED", "Session has been logged out")
        }
        SessionError::RevocationCheckFailed(msg) => {
            tracing::error!("Session revocation check failed: {}", msg);
            ApiResponse::internal_error()
        }
    }
}

/// Bearer token from `Authorization`, falling back to the session cookie.
pub fn extract_session_token(req: &HttpRequest) -> Option<String> {
    let from_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    from_header.or_else(|| {
        req.cookie(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|t| !t.is_empty())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::auth_helper::{
        issue_token, session_verifier, session_verifier_with, StubRevocations, TEST_ADMIN_EMAIL,
    };
    use actix_web::{cookie::Cookie, get, test, App};

    #[get("/guarded")]
    async fn guarded(session: AdminSession) -> HttpResponse {
        ApiResponse::success(session.admin.email)
    }

    async fn call(req: test::TestRequest, verifier: SessionVerifier) -> (u16, serde_json::Value) {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(verifier))
                .service(guarded),
        )
        .await;

        let resp = test::call_service(&app, req.uri("/guarded").to_request()).await;
        let status = resp.status().as_u16();
        let body: serde_json::Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn bearer_token_is_accepted() {
        let req = test::TestRequest::get()
            .insert_header(("Authorization", format!("Bearer {}", issue_token())));

        let (status, body) = call(req, session_verifier()).await;

        assert_eq!(status, 200);
        assert_eq!(body["data"], TEST_ADMIN_EMAIL);
    }

    #[actix_web::test]
    async fn session_cookie_is_accepted() {
        let req = test::TestRequest::get().cookie(Cookie::new(SESSION_COOKIE, issue_token()));

        let (status, _) = call(req, session_verifier()).await;

        assert_eq!(status, 200);
    }

    #[actix_web::test]
    async fn missing_token_is_unauthorized() {
        let (status, body) = call(test::TestRequest::get(), session_verifier()).await;

        assert_eq!(status, 401);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "UNAUTHORIZED");
    }

    #[actix_web::test]
    async fn forged_token_is_invalid() {
        let req = test::TestRequest::get().insert_header(("Authorization", "Bearer forged"));

        let (status, body) = call(req, session_verifier()).await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "INVALID_SESSION");
    }

    #[actix_web::test]
    async fn revoked_token_is_rejected() {
        let token = issue_token();
        let revocations = StubRevocations::new();
        revocations.mark_revoked(&token);

        let req = test::TestRequest::get()
            .insert_header(("Authorization", format!("Bearer {token}")));

        let (status, body) = call(req, session_verifier_with(revocations)).await;

        assert_eq!(status, 401);
        assert_eq!(body["error"]["code"], "SESSION_REVOKED");
    }

    #[actix_web::test]
    async fn revocation_store_failure_is_internal_error() {
        let req = test::TestRequest::get()
            .insert_header(("Authorization", format!("Bearer {}", issue_token())));

        let (status, body) = call(req, session_verifier_with(StubRevocations::failing())).await;

        assert_eq!(status, 500);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }

    #[actix_web::test]
    async fn header_takes_precedence_over_cookie() {
        let req = test::TestRequest::default()
            .insert_header(("Authorization", "Bearer from-header"))
            .cookie(Cookie::new(SESSION_COOKIE, "from-cookie"))
            .to_http_request();

        assert_eq!(extract_session_token(&req).as_deref(), Some("from-header"));
    }

    #[actix_web::test]
    async fn empty_bearer_falls_back_to_cookie() {
        let req = test::TestRequest::default()
            .insert_header(("Authorization", "Bearer "))
            .cookie(Cookie::new(SESSION_COOKIE, "from-cookie"))
            .to_http_request();

        assert_eq!(extract_session_token(&req).as_deref(), Some("from-cookie"));
    }
}
