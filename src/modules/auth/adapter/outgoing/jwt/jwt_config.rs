use std::fmt;

use crate::config::{parse_or, ConfigError, ConfigSource};

pub const MIN_SECRET_LEN: usize = 32;
pub const DEFAULT_SESSION_MAX_AGE: i64 = 86_400;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Lifetime of an admin session, in seconds.
    pub session_max_age: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret_key", &"<redacted>")
            .field("session_max_age", &self.session_max_age)
            .finish()
    }
}

impl JwtConfig {
    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let secret_key = source.required("JWT_SECRET")?;
        if secret_key.chars().count() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {MIN_SECRET_LEN} characters"),
            });
        }

        let session_max_age = parse_or(source, "SESSION_MAX_AGE", DEFAULT_SESSION_MAX_AGE)?;
        if session_max_age <= 0 {
            return Err(ConfigError::Invalid {
                key: "SESSION_MAX_AGE",
                reason: "must be a positive number of seconds".to_string(),
            });
        }

        Ok(Self {
            secret_key,
            session_max_age,
        })
    }
}
