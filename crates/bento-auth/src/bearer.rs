//! `Authorization: Bearer <token>` header parsing.

use http::HeaderMap;
use http::header::AUTHORIZATION;

/// Why a request carried no usable bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("missing authorization header")]
    Missing,
    #[error("malformed authorization header")]
    Malformed,
    #[error("unsupported authorization scheme")]
    Scheme,
}

/// Extract the token from an `Authorization` header.
///
/// The header must hold exactly two whitespace-separated parts; the scheme
/// is compared case-insensitively.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, BearerError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?;

    let mut parts = value.split_whitespace();
    let (Some(scheme), Some(token), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(BearerError::Malformed);
    };
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Scheme);
    }
    Ok(token)
}
