pub mod auth;

pub use auth::{extract_session_token, AdminSession, SESSION_COOKIE};
