//! HMAC-SHA256 request signing for the search-ad API.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::NaverError;

type HmacSha256 = Hmac<Sha256>;

/// Builds the string that gets signed: `{timestamp}.{method}.{uri}.{body}`.
///
/// Requests without a body still carry the trailing separator.
#[must_use]
pub fn signing_message(timestamp: i64, method: &str, uri: &str, body: &str) -> String {
    format!("{timestamp}.{method}.{uri}.{body}")
}

/// Signs a request and returns the base64-encoded HMAC-SHA256 digest.
///
/// # Errors
///
/// Returns [`NaverError::Signature`] if the HMAC key is rejected.
pub fn sign(
    secret: &str,
    timestamp: i64,
    method: &str,
    uri: &str,
    body: &str,
) -> Result<String, NaverError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| NaverError::Signature(e.to_string()))?;
    mac.update(signing_message(timestamp, method, uri, body).as_bytes());
    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
