use actix_web::{web, HttpResponse, Result};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::application::ports::outgoing::token_provider::SessionClaims;
use crate::config::{runtime_env, EnvSource};

/// Tables wiped by `/test/cleanup/all`, in one TRUNCATE statement.
const CONTENT_TABLES: &[&str] = &[
    "hero",
    "about",
    "stats",
    "projects",
    "testimonials",
    "technologies",
    "solutions",
    "recognitions",
    "social_links",
    "contact_messages",
    "newsletter_subscribers",
    "resumes",
];

#[derive(Serialize)]
pub struct CleanupResponse {
    truncated_tables: usize,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    environment: String,
}

#[derive(Serialize)]
pub struct TokenResponse {
    token: String,
}

#[derive(Debug)]
enum TokenKind {
    Valid,
    Expired,
    NotYetValid,
    InvalidSignature,
    Malformed,
}

impl std::str::FromStr for TokenKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Valid" => Ok(TokenKind::Valid),
            "Expired" => Ok(TokenKind::Expired),
            "NotYetValid" => Ok(TokenKind::NotYetValid),
            "InvalidSignature" => Ok(TokenKind::InvalidSignature),
            "Malformed" => Ok(TokenKind::Malformed),
            _ => Err(format!("Unknown token_kind: {}", s)),
        }
    }
}

fn refuse_in_production() -> Option<HttpResponse> {
    if runtime_env() == "production" {
        tracing::error!("Test helper routes active in production");
        return Some(HttpResponse::InternalServerError().json(serde_json::json!({
            "status": "error",
            "reason": "test-helper-running-in-production"
        })));
    }
    None
}

/// GET /test/health
pub async fn health_check() -> Result<HttpResponse> {
    if let Some(refused) = refuse_in_production() {
        return Ok(refused);
    }

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        environment: runtime_env(),
    }))
}

/// Empties every content table so a suite starts from the seeded defaults.
/// DELETE /test/cleanup/all
pub async fn cleanup_all(db: web::Data<Arc<DatabaseConnection>>) -> Result<HttpResponse> {
    if let Some(refused) = refuse_in_production() {
        return Ok(refused);
    }

    let sql = format!("TRUNCATE TABLE {} RESTART IDENTITY", CONTENT_TABLES.join(", "));
    db.as_ref()
        .execute(Statement::from_string(db.get_database_backend(), sql))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("Cleanup failed: {}", e))
        })?;

    Ok(HttpResponse::Ok().json(CleanupResponse {
        truncated_tables: CONTENT_TABLES.len(),
    }))
}

/// Session tokens in a chosen state for the admin `email`.
/// GET /test/token/{token_kind}/{email}
pub async fn generate_test_token(path: web::Path<(String, String)>) -> Result<HttpResponse> {
    if let Some(refused) = refuse_in_production() {
        return Ok(refused);
    }

    let (token_kind_str, email) = path.into_inner();
    let token_kind: TokenKind = token_kind_str
        .parse()
        .map_err(|e: String| actix_web::error::ErrorBadRequest(e))?;

    tracing::debug!(kind = ?token_kind, email = %email, "Generating test session token");

    let config = JwtConfig::from_source(&EnvSource)
        .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;
    let invalid_secret = "wrong-secret-for-signature-tests";

    let now = Utc::now().timestamp();
    let claims = |iat: i64, nbf: i64, exp: i64| SessionClaims {
        sub: email.clone(),
        email: email.clone(),
        role: "admin".to_string(),
        exp,
        iat,
        nbf,
        jti: Uuid::new_v4(),
    };

    let (claims, secret) = match token_kind {
        TokenKind::Valid => (
            claims(now, now, now + config.session_max_age),
            config.secret_key.as_str(),
        ),
        // Past the verifier's leeway.
        TokenKind::Expired => (
            claims(now - 7200, now - 7200, now - 120),
            config.secret_key.as_str(),
        ),
        TokenKind::NotYetValid => (
            claims(now, now + 300, now + 3600),
            config.secret_key.as_str(),
        ),
        TokenKind::InvalidSignature => (claims(now, now, now + 3600), invalid_secret),
        TokenKind::Malformed => {
            return Ok(HttpResponse::Ok().json(TokenResponse {
                token: format!("malformed.{}.token", Uuid::new_v4()),
            }));
        }
    };

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let token = encode(&Header::new(Algorithm::HS256), &claims, &encoding_key).map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("Token encoding error: {}", e))
    })?;

    Ok(HttpResponse::Ok().json(TokenResponse { token }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/test")
            .route("/health", web::get().to(health_check))
            .route("/cleanup/all", web::delete().to(cleanup_all))
            .route(
                "/token/{token_kind}/{email}",
                web::get().to(generate_test_token),
            ),
    );
}
