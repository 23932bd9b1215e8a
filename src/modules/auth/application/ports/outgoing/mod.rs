pub mod password_hasher;
pub mod session_revocation;
pub mod token_provider;

pub use password_hasher::{HashError, PasswordVerifier};
pub use session_revocation::{SessionRevocationError, SessionRevocationRepository};
pub use token_provider::{IssuedSession, SessionClaims, TokenError, TokenProvider};
