use std::sync::Arc;

use crate::auth::application::{
    ports::outgoing::{
        SessionClaims, SessionRevocationError, SessionRevocationRepository, TokenError,
        TokenProvider,
    },
    services::token_hasher::hash_token,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionError {
    #[error("Invalid session: {0}")]
    Invalid(TokenError),

    #[error("Session has been revoked")]
    Revoked,

    #[error("Revocation check failed: {0}")]
    RevocationCheckFailed(String),
}

impl From<SessionRevocationError> for SessionError {
    fn from(err: SessionRevocationError) -> Self {
        SessionError::RevocationCheckFailed(err.to_string())
    }
}

/// Validates a presented session token: signature and lifetime first, then the
/// revocation list.
#[derive(Clone)]
pub struct SessionVerifier {
    tokens: Arc<dyn TokenProvider>,
    revocations: Arc<dyn SessionRevocationRepository>,
}

impl SessionVerifier {
    pub fn new(
        tokens: Arc<dyn TokenProvider>,
        revocations: Arc<dyn SessionRevocationRepository>,
    ) -> Self {
        Self {
            tokens,
            revocations,
        }
    }

    pub async fn verify(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let claims = self
            .tokens
            .verify_session(token)
            .map_err(SessionError::Invalid)?;

        if self.revocations.is_revoked(&hash_token(token)).await? {
            tracing::info!(jti = %claims.jti, "Rejected revoked session");
            return Err(SessionError::Revoked);
        }

        Ok(claims)
    }
}
