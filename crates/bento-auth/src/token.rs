//! JWT session tokens.

use std::time::{SystemTime, UNIX_EPOCH};

use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

/// Session lifetime when the service does not override it (2 hours).
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 7200;

/// Errors returned by [`issue_token`] and [`validate_token`].
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `sub` | `sub` | username the token was issued to |
/// | `exp` | `exp` | expiration, seconds since UNIX epoch |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: u64,
}

/// A freshly signed token and its expiry.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub exp: u64,
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Sign an HS256 token for `subject`, valid for `ttl_secs` from now.
pub fn issue_token(subject: &str, secret: &str, ttl_secs: u64) -> Result<IssuedToken, TokenError> {
    let exp = now_secs().saturating_add(ttl_secs);
    let claims = Claims {
        sub: subject.to_owned(),
        exp,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Signing)?;
    Ok(IssuedToken { token, exp })
}

/// Decode and validate a token, returning its claims.
///
/// Validation: HS256 only, `exp` and `sub` required, zero leeway on `exp`
/// (issuer and verifier share one clock), non-empty subject.
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 0;
    validation.set_required_spec_claims(&["exp", "sub"]);

    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })?;

    if data.claims.sub.is_empty() {
        return Err(TokenError::Malformed);
    }
    Ok(data.claims)
}
