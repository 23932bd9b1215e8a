use argon2::{
    password_hash::{Error as PasswordHashError, PasswordHash, PasswordVerifier as _},
    Argon2,
};
use async_trait::async_trait;

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordVerifier};

/// Checks passwords against an Argon2 PHC string. The parameters come from
/// the stored hash itself.
#[derive(Debug, Clone, Default)]
pub struct Argon2Verifier;

impl Argon2Verifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PasswordVerifier for Argon2Verifier {
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hash = hash.to_string();

        tokio::task::spawn_blocking(move || {
            let parsed_hash = PasswordHash::new(&hash).map_err(|_| HashError::InvalidHash)?;

            match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
                Ok(_) => Ok(true),
                Err(PasswordHashError::Password) => Ok(false),
                Err(_) => Err(HashError::VerifyFailed),
            }
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}
