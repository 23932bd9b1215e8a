use sha2::{Digest, Sha256};

/// Hex SHA-256 of a raw token. Revocation entries are stored under this, never the token.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Compares two secrets through their digests so the comparison length is fixed.
pub fn digests_match(left: &str, right: &str) -> bool {
    let a = Sha256::digest(left.as_bytes());
    let b = Sha256::digest(right.as_bytes());
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_is_stable_hex() {
        let hash = hash_token("session-token");
        assert_eq!(hash, hash_token("session-token"));
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn different_tokens_hash_differently() {
        assert_ne!(hash_token("a"), hash_token("b"));
    }

    #[test]
    fn digests_match_only_equal_inputs() {
        assert!(digests_match("admin123", "admin123"));
        assert!(!digests_match("admin123", "admin124"));
        assert!(!digests_match("admin123", ""));
    }
}
