use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, thiserror::Error)]
pub enum SessionRevocationError {
    #[error("Revocation store error: {0}")]
    StoreError(String),
}

/// Revoked session tokens, keyed by the SHA-256 of the raw token.
#[async_trait]
pub trait SessionRevocationRepository: Send + Sync {
    /// Entries disappear on their own once `expires_at` has passed.
    async fn revoke(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionRevocationError>;

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionRevocationError>;
}
