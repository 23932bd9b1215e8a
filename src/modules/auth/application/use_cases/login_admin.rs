use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use email_address::EmailAddress;
use serde::Serialize;
use tracing::{info, warn};

use crate::auth::application::{
    domain::entities::{AdminCredentials, AdminIdentity, AdminSecret},
    ports::outgoing::{PasswordVerifier, TokenProvider},
    services::token_hasher::digests_match,
};

// ========================= Login Request =========================
/// Validated login input.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginRequestError {
    #[error("Email is required")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password is required")]
    EmptyPassword,
}

impl LoginRequest {
    pub fn new(email: String, password: String) -> Result<Self, LoginRequestError> {
        let email = email.trim().to_lowercase();
        if email.is_empty() {
            return Err(LoginRequestError::EmptyEmail);
        }
        if !EmailAddress::is_valid(&email) {
            return Err(LoginRequestError::InvalidEmailFormat);
        }
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

// ====================== Login Error =============================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    PasswordVerificationFailed(String),

    #[error("Token generation failed: {0}")]
    TokenGenerationFailed(String),
}

// ============================ Login Response =================================
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub admin: AdminIdentity,
}

// ============================ Login Use Case =============================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAdminUseCase {
    credentials: AdminCredentials,
    password_verifier: Arc<dyn PasswordVerifier>,
    token_provider: Arc<dyn TokenProvider>,
}

impl LoginAdminUseCase {
    pub fn new(
        credentials: AdminCredentials,
        password_verifier: Arc<dyn PasswordVerifier>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            credentials,
            password_verifier,
            token_provider,
        }
    }

    async fn password_matches(&self, password: &str) -> Result<bool, LoginError> {
        match self.credentials.secret() {
            AdminSecret::Plain(expected) => Ok(digests_match(password, expected)),
            AdminSecret::Argon2Hash(hash) => self
                .password_verifier
                .verify_password(password, hash)
                .await
                .map_err(|e| LoginError::PasswordVerificationFailed(e.to_string())),
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        // Run the password check even for an unknown email so both paths cost the same.
        let password_ok = self.password_matches(request.password()).await?;
        let email_ok = self.credentials.matches_email(request.email());

        if !(email_ok && password_ok) {
            warn!(email = %request.email(), "Rejected admin login");
            return Err(LoginError::InvalidCredentials);
        }

        let admin = AdminIdentity::new(self.credentials.email());
        let session = self
            .token_provider
            .issue_session(&admin)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        info!(email = %admin.email, "Admin signed in");

        Ok(LoginResponse {
            token: session.token,
            expires_at: session.expires_at,
            admin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    use crate::auth::application::ports::outgoing::{
        HashError, IssuedSession, SessionClaims, TokenError,
    };

    struct StubVerifier {
        result: Result<bool, HashError>,
    }

    #[async_trait]
    impl PasswordVerifier for StubVerifier {
        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            self.result.clone()
        }
    }

    struct StubTokens {
        fail: bool,
    }

    impl TokenProvider for StubTokens {
        fn issue_session(&self, admin: &AdminIdentity) -> Result<IssuedSession, TokenError> {
            if self.fail {
                return Err(TokenError::EncodingError("boom".into()));
            }
            Ok(IssuedSession {
                token: format!("token-for-{}", admin.email),
                expires_at: Utc::now() + Duration::hours(24),
            })
        }

        fn verify_session(&self, _token: &str) -> Result<SessionClaims, TokenError> {
            unimplemented!("Not used in login tests")
        }
    }

    fn use_case(secret: AdminSecret, verifier: Result<bool, HashError>, fail: bool) -> LoginAdminUseCase {
        LoginAdminUseCase::new(
            AdminCredentials::new("owner@example.com", secret),
            Arc::new(StubVerifier { result: verifier }),
            Arc::new(StubTokens { fail }),
        )
    }

    fn request(email: &str, password: &str) -> LoginRequest {
        LoginRequest::new(email.to_string(), password.to_string()).unwrap()
    }

    #[test]
    fn request_validation() {
        assert_eq!(
            LoginRequest::new("  ".into(), "pw".into()).unwrap_err(),
            LoginRequestError::EmptyEmail
        );
        assert_eq!(
            LoginRequest::new("nope".into(), "pw".into()).unwrap_err(),
            LoginRequestError::InvalidEmailFormat
        );
        assert_eq!(
            LoginRequest::new("a@b.com".into(), "".into()).unwrap_err(),
            LoginRequestError::EmptyPassword
        );

        let ok = LoginRequest::new(" Owner@Example.com ".into(), "pw".into()).unwrap();
        assert_eq!(ok.email(), "owner@example.com");
    }

    #[tokio::test]
    async fn plaintext_secret_login_succeeds() {
        let uc = use_case(AdminSecret::Plain("s3cret".into()), Ok(false), false);

        let response = uc.execute(request("OWNER@example.com", "s3cret")).await.unwrap();

        assert_eq!(response.token, "token-for-owner@example.com");
        assert_eq!(response.admin.id, "admin");
        assert_eq!(response.admin.role, "admin");
        assert!(response.expires_at > Utc::now());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let uc = use_case(AdminSecret::Plain("s3cret".into()), Ok(false), false);

        let result = uc.execute(request("owner@example.com", "wrong")).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_email_is_rejected() {
        let uc = use_case(AdminSecret::Plain("s3cret".into()), Ok(false), false);

        let result = uc.execute(request("intruder@example.com", "s3cret")).await;
        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn hashed_secret_delegates_to_verifier() {
        let ok = use_case(AdminSecret::Argon2Hash("$argon2id$x".into()), Ok(true), false);
        assert!(ok.execute(request("owner@example.com", "any")).await.is_ok());

        let rejected = use_case(AdminSecret::Argon2Hash("$argon2id$x".into()), Ok(false), false);
        assert!(matches!(
            rejected.execute(request("owner@example.com", "any")).await,
            Err(LoginError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn verifier_failure_is_reported() {
        let uc = use_case(
            AdminSecret::Argon2Hash("garbage".into()),
            Err(HashError::InvalidHash),
            false,
        );

        let result = uc.execute(request("owner@example.com", "any")).await;
        assert!(matches!(
            result,
            Err(LoginError::PasswordVerificationFailed(_))
        ));
    }

    #[tokio::test]
    async fn token_failure_is_reported() {
        let uc = use_case(AdminSecret::Plain("s3cret".into()), Ok(false), true);

        let result = uc.execute(request("owner@example.com", "s3cret")).await;
        assert!(matches!(result, Err(LoginError::TokenGenerationFailed(_))));
    }
}
