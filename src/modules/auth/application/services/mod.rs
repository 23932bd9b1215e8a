pub mod session_verifier;
pub mod token_hasher;

pub use session_verifier::{SessionError, SessionVerifier};
