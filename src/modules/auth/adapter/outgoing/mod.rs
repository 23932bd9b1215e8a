pub mod jwt;
pub mod security;
pub mod session_revocation_redis;
