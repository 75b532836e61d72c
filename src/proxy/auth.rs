//! Basic-auth header construction.

use axum::http::header::InvalidHeaderValue;
use axum::http::HeaderValue;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Encode a credential pair into an `Authorization: Basic` header value.
///
/// Encoding is unconditional: an empty user and password still produce a
/// (degenerate) `Basic Og==` header. The header is never suppressed based on
/// credential content. The value is marked sensitive so it is redacted from
/// debug output.
pub fn basic_auth_header(user: &str, password: &str) -> Result<HeaderValue, InvalidHeaderValue> {
    let token = STANDARD.encode(format!("{user}:{password}"));
    let mut value = HeaderValue::from_str(&format!("Basic {token}"))?;
    value.set_sensitive(true);
    Ok(value)
}
