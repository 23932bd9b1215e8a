use std::fmt;

use serde::Serialize;

pub const ADMIN_ID: &str = "admin";
pub const ADMIN_NAME: &str = "Admin User";
pub const ADMIN_ROLE: &str = "admin";

/// The single administrator recognised by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminIdentity {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

impl AdminIdentity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: ADMIN_ID.to_string(),
            email: email.into(),
            name: ADMIN_NAME.to_string(),
            role: ADMIN_ROLE.to_string(),
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub enum AdminSecret {
    /// Argon2 PHC string, e.g. `$argon2id$v=19$...`.
    Argon2Hash(String),
    Plain(String),
}

impl fmt::Debug for AdminSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdminSecret::Argon2Hash(_) => f.write_str("Argon2Hash(<redacted>)"),
            AdminSecret::Plain(_) => f.write_str("Plain(<redacted>)"),
        }
    }
}

/// Admin login pair, loaded once at startup.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    email: String,
    secret: AdminSecret,
}

impl AdminCredentials {
    pub fn new(email: impl Into<String>, secret: AdminSecret) -> Self {
        Self {
            email: email.into().trim().to_lowercase(),
            secret,
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn secret(&self) -> &AdminSecret {
        &self.secret
    }

    pub fn matches_email(&self, email: &str) -> bool {
        self.email == email.trim().to_lowercase()
    }
}
