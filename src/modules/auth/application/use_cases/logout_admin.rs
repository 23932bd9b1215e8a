use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::auth::application::{
    ports::outgoing::{SessionRevocationRepository, TokenProvider},
    services::token_hasher::hash_token,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Token revocation failed: {0}")]
    TokenRevocationFailed(String),
}

#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    /// Revokes `token` if it is still a live session. Missing, expired or
    /// forged tokens have nothing to revoke and succeed.
    async fn execute(&self, token: Option<String>) -> Result<(), LogoutError>;
}

#[derive(Clone)]
pub struct LogoutAdminUseCase {
    revocations: Arc<dyn SessionRevocationRepository>,
    token_provider: Arc<dyn TokenProvider>,
}

impl LogoutAdminUseCase {
    pub fn new(
        revocations: Arc<dyn SessionRevocationRepository>,
        token_provider: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            revocations,
            token_provider,
        }
    }
}

#[async_trait]
impl ILogoutAdminUseCase for LogoutAdminUseCase {
    async fn execute(&self, token: Option<String>) -> Result<(), LogoutError> {
        let Some(token) = token.map(|t| t.trim().to_string()).filter(|t| !t.is_empty()) else {
            return Ok(());
        };

        let claims = match self.token_provider.verify_session(&token) {
            Ok(claims) => claims,
            Err(err) => {
                debug!(error = %err, "Logout with unusable token, nothing to revoke");
                return Ok(());
            }
        };

        self.revocations
            .revoke(&hash_token(&token), claims.expires_at())
            .await
            .map_err(|e| LogoutError::TokenRevocationFailed(e.to_string()))?;

        info!(jti = %claims.jti, "Admin session revoked");
        Ok(())
    }
}
