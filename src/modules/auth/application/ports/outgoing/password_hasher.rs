use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashError {
    #[error("Stored password hash is invalid")]
    InvalidHash,

    #[error("Password verification failed")]
    VerifyFailed,

    #[error("Password verification task failed")]
    TaskFailed,
}

#[async_trait]
pub trait PasswordVerifier: Send + Sync {
    /// `Ok(false)` on a wrong password; `Err` only when the check itself failed.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
