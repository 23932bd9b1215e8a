use sha2::{Digest, Sha256};

pub const SIGNATURE_ALGORITHM: &str = "sha256";

/// Cloudinary request signature: the non-empty params sorted by key, joined as
/// `k=v&k=v`, with the API secret appended, SHA-256 hex encoded.
pub fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut signed: Vec<_> = params.iter().filter(|(_, v)| !v.is_empty()).collect();
    signed.sort_by(|a, b| a.0.cmp(b.0));

    let to_sign = signed
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}
