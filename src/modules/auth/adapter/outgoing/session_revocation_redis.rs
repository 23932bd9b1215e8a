use async_trait::async_trait;
use chrono::{DateTime, Utc};
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::session_revocation::{
    SessionRevocationError, SessionRevocationRepository,
};

/// Redis-backed revocation list for admin sessions.
///
/// ```text
/// auth:revoked:session:{token_hash} -> "1"   (TTL = remaining token lifetime)
/// ```
///
/// A key that exists means the session was logged out. Redis drops the key
/// once the token would have expired anyway.
#[derive(Clone)]
pub struct RedisSessionRevocationRepository {
    pool: Arc<Pool>,
}

impl RedisSessionRevocationRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(token_hash: &str) -> String {
        format!("auth:revoked:session:{token_hash}")
    }

    /// Seconds left until `expires_at`, `None` when already past.
    fn remaining_ttl(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> Option<u64> {
        let ttl = (expires_at - now).num_seconds();
        (ttl > 0).then_some(ttl as u64)
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionRevocationError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionRevocationError::StoreError(format!("Pool error: {}", e)))
    }
}

#[async_trait]
impl SessionRevocationRepository for RedisSessionRevocationRepository {
    async fn revoke(
        &self,
        token_hash: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<(), SessionRevocationError> {
        let Some(ttl) = Self::remaining_ttl(expires_at, Utc::now()) else {
            tracing::debug!("Session already expired, skipping revocation entry");
            return Ok(());
        };

        let mut conn = self.get_conn().await?;

        let _: () = conn
            .set_ex(Self::session_key(token_hash), "1", ttl)
            .await
            .map_err(|e| SessionRevocationError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn is_revoked(&self, token_hash: &str) -> Result<bool, SessionRevocationError> {
        let mut conn = self.get_conn().await?;

        let exists: bool = conn
            .exists(Self::session_key(token_hash))
            .await
            .map_err(|e| SessionRevocationError::StoreError(e.to_string()))?;

        Ok(exists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use std::sync::Once;

    #[test]
    fn key_is_namespaced_by_hash() {
        assert_eq!(
            RedisSessionRevocationRepository::session_key("abc123"),
            "auth:revoked:session:abc123"
        );
    }

    #[test]
    fn ttl_tracks_remaining_lifetime() {
        let now = Utc::now();

        assert_eq!(
            RedisSessionRevocationRepository::remaining_ttl(now + Duration::seconds(90), now),
            Some(90)
        );
        assert_eq!(
            RedisSessionRevocationRepository::remaining_ttl(now, now),
            None
        );
        assert_eq!(
            RedisSessionRevocationRepository::remaining_ttl(now - Duration::seconds(5), now),
            None
        );
    }

    fn unreachable_repo() -> RedisSessionRevocationRepository {
        let pool = deadpool_redis::Config::from_url("redis://127.0.0.1:6399")
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .unwrap();
        RedisSessionRevocationRepository::new(Arc::new(pool))
    }

    #[tokio::test]
    async fn expired_session_is_a_no_op_without_touching_redis() {
        let repo = unreachable_repo();

        let result = repo
            .revoke("hash", Utc::now() - Duration::seconds(1))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn unreachable_store_is_reported() {
        let repo = unreachable_repo();

        let result = repo.is_revoked("hash").await;

        assert!(matches!(result, Err(SessionRevocationError::StoreError(_))));
    }

    // Integration tests below need a live Redis at REDIS_URL.

    static TLS_INIT: Once = Once::new();

    fn init_tls() {
        TLS_INIT.call_once(|| {
            let _ = rustls::crypto::ring::default_provider().install_default();
        });
    }

    fn live_repo() -> Option<RedisSessionRevocationRepository> {
        init_tls();
        let Ok(redis_url) = std::env::var("REDIS_URL") else {
            eprintln!("REDIS_URL not set; skipping Redis integration test");
            return None;
        };

        let pool = deadpool_redis::Config::from_url(&redis_url)
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .expect("Failed to create Redis pool");

        Some(RedisSessionRevocationRepository::new(Arc::new(pool)))
    }

    #[tokio::test]
    async fn revoked_session_is_reported() {
        let Some(repo) = live_repo() else { return };
        let hash = format!("it-{}", uuid::Uuid::new_v4());

        assert!(!repo.is_revoked(&hash).await.unwrap());

        repo.revoke(&hash, Utc::now() + Duration::seconds(30))
            .await
            .unwrap();

        assert!(repo.is_revoked(&hash).await.unwrap());
    }

    #[tokio::test]
    async fn revocation_expires_with_the_token() {
        let Some(repo) = live_repo() else { return };
        let hash = format!("it-{}", uuid::Uuid::new_v4());

        repo.revoke(&hash, Utc::now() + Duration::seconds(2))
            .await
            .unwrap();

        tokio::time::sleep(std::time::Duration::from_secs(3)).await;

        assert!(!repo.is_revoked(&hash).await.unwrap());
    }
}
