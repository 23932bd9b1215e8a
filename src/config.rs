use std::collections::HashMap;
use std::str::FromStr;

use crate::auth::adapter::outgoing::jwt::JwtConfig;
use crate::auth::application::domain::entities::{AdminCredentials, AdminSecret};
use crate::media::adapter::outgoing::cloudinary::CloudinaryConfig;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@anirban.dev";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Source of configuration values. Production reads the process environment;
/// tests pass a map.
pub trait ConfigSource {
    fn get(&self, key: &str) -> Option<String>;

    /// Non-blank value for `key`.
    fn value(&self, key: &str) -> Option<String> {
        self.get(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn required(&self, key: &'static str) -> Result<String, ConfigError> {
        self.value(key).ok_or(ConfigError::Missing(key))
    }
}

/// Parses `key` when present, `default` otherwise.
pub fn parse_or<T>(source: &dyn ConfigSource, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match source.value(key) {
        None => Ok(default),
        Some(raw) => raw.parse::<T>().map_err(|e| ConfigError::Invalid {
            key,
            reason: e.to_string(),
        }),
    }
}

pub struct EnvSource;

impl ConfigSource for EnvSource {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl ConfigSource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

/// `RUST_ENV`, defaulting to `development`.
pub fn runtime_env() -> String {
    std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Loads `.env.{RUST_ENV}` first and falls back to `.env`.
pub fn load_env_files() {
    let env_file = format!(".env.{}", runtime_env());
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    pub jwt: JwtConfig,
    pub admin: AdminCredentials,
    pub cloudinary: CloudinaryConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_source(&EnvSource)
    }

    pub fn from_source(source: &dyn ConfigSource) -> Result<Self, ConfigError> {
        let environment = source
            .value("RUST_ENV")
            .unwrap_or_else(|| "development".to_string());
        let production = environment == "production";

        Ok(Self {
            host: source
                .value("HOST")
                .unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(source, "PORT", 8080u16)?,
            database_url: source.required("DATABASE_URL")?,
            redis_url: source.required("REDIS_URL")?,
            jwt: JwtConfig::from_source(source)?,
            admin: admin_credentials(source, production)?,
            cloudinary: CloudinaryConfig::from_source(source)?,
            environment,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `ADMIN_PASSWORD_HASH` (argon2 PHC string) wins over plaintext `ADMIN_PASSWORD`.
/// Outside production, missing values fall back to the built-in development pair.
fn admin_credentials(
    source: &dyn ConfigSource,
    production: bool,
) -> Result<AdminCredentials, ConfigError> {
    let email = match source.value("ADMIN_EMAIL") {
        Some(email) => email,
        None if production => return Err(ConfigError::Missing("ADMIN_EMAIL")),
        None => {
            tracing::warn!("ADMIN_EMAIL not set, using development default");
            DEFAULT_ADMIN_EMAIL.to_string()
        }
    };

    let secret = if let Some(hash) = source.value("ADMIN_PASSWORD_HASH") {
        if !hash.starts_with("$argon2") {
            return Err(ConfigError::Invalid {
                key: "ADMIN_PASSWORD_HASH",
                reason: "expected an argon2 PHC string".to_string(),
            });
        }
        AdminSecret::Argon2Hash(hash)
    } else if let Some(password) = source.value("ADMIN_PASSWORD") {
        if production {
            tracing::warn!("ADMIN_PASSWORD is plaintext; prefer ADMIN_PASSWORD_HASH in production");
        }
        AdminSecret::Plain(password)
    } else if production {
        return Err(ConfigError::Missing("ADMIN_PASSWORD_HASH"));
    } else {
        tracing::warn!("ADMIN_PASSWORD not set, using development default");
        AdminSecret::Plain(DEFAULT_ADMIN_PASSWORD.to_string())
    };

    Ok(AdminCredentials::new(email, secret))
}
