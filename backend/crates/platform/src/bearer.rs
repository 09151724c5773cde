//! Bearer token extraction
//!
//! Reads `Authorization: Bearer <token>` from request headers.

use axum::http::{HeaderMap, header};

/// Error when extracting a bearer token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    /// No `Authorization` header, or a scheme with no token after it
    #[error("Missing bearer token")]
    Missing,

    /// Header present but not `Bearer <token>`
    #[error("Malformed authorization header")]
    Malformed,
}

/// Extract the bearer token from request headers
///
/// ## Returns
/// * `Ok(&str)` - The raw token (not yet verified)
/// * `Err(BearerError::Missing)` - No header or no token
/// * `Err(BearerError::Malformed)` - Non-UTF-8 header or a scheme other than `Bearer`
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(v) => v.to_str().map_err(|_| BearerError::Malformed)?,
        None => return Err(BearerError::Missing),
    };

    let mut parts = value.split_whitespace();
    let scheme = parts.next().ok_or(BearerError::Missing)?;
    let token = parts.next().ok_or(BearerError::Missing)?;

    if !scheme.eq_ignore_ascii_case("bearer") || parts.next().is_some() {
        return Err(BearerError::Malformed);
    }

    Ok(token)
}
