use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::{
    domain::entities::AdminIdentity,
    ports::outgoing::{SessionRevocationError, SessionRevocationRepository, TokenProvider},
    services::{token_hasher::hash_token, SessionVerifier},
};

pub const TEST_JWT_SECRET: &str = "test_secret_key_for_testing_only_32+";
pub const TEST_ADMIN_EMAIL: &str = "admin@example.com";

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: TEST_JWT_SECRET.to_string(),
        session_max_age: 3600,
    })
}

/// A real session token for the test admin, signed with the test secret.
pub fn issue_token() -> String {
    create_test_jwt_service()
        .issue_session(&AdminIdentity::new(TEST_ADMIN_EMAIL))
        .expect("test token should be issued")
        .token
}

pub fn bearer() -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", issue_token()))
}

/// In-memory revocation list.
#[derive(Default)]
pub struct StubRevocations {
    revoked: Mutex<HashSet<String>>,
    fail: bool,
}

impl StubRevocations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn mark_revoked(&self, token: &str) {
        self.revoked.lock().unwrap().insert(hash_token(token));
    }
}

#[async_trait]
impl SessionRevocationRepository for StubRevocations {
    async fn revoke(
        &self,
        token_hash: &str,
        _expires_at: DateTime<Utc>,
    ) -> Result<(), SessionRevocationError> {
        if self.fail {
            return Err(SessionRevocationError::StoreError("stub store down".into()));
        }
        self.revoked.lock().unwrap().insert(token_hash.to_string());
        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionRevocationError> {
        if self.fail {
            return Err(SessionRevocationError::StoreError("stub store down".into()));
        }
        Ok(self.revoked.lock().unwrap().contains(token_hash))
    }
}

pub fn session_verifier() -> SessionVerifier {
    session_verifier_with(StubRevocations::new())
}

pub fn session_verifier_with(revocations: StubRevocations) -> SessionVerifier {
    SessionVerifier::new(
        Arc::new(create_test_jwt_service()),
        Arc::new(revocations),
    )
}
