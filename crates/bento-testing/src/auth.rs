//! Bearer token helpers for integration tests.
//!
//! Services under test are built with [`TEST_JWT_SECRET`], so tokens minted
//! here pass the real guard without going through `/login`.

use bento_auth::token::{Claims, issue_token};
use http::{HeaderName, HeaderValue, header::AUTHORIZATION};
use jsonwebtoken::{EncodingKey, Header, encode};

pub const TEST_JWT_SECRET: &str = "bento-test-secret";

/// A valid one-hour token for `username`.
pub fn token_for(username: &str) -> String {
    issue_token(username, TEST_JWT_SECRET, 3600)
        .expect("sign test token")
        .token
}

/// A token for `username` whose `exp` is already in the past.
pub fn expired_token_for(username: &str) -> String {
    sign(username, 1_000_000, TEST_JWT_SECRET)
}

/// A token for `username` signed with a secret the service does not know.
pub fn forged_token_for(username: &str) -> String {
    sign(username, u32::MAX as u64, "not-the-service-secret")
}

/// `("authorization", "Bearer <token>")`, ready for `TestRequest::add_header`.
pub fn bearer(token: &str) -> (HeaderName, HeaderValue) {
    let value = HeaderValue::from_str(&format!("Bearer {token}")).expect("token is header-safe");
    (AUTHORIZATION, value)
}

fn sign(sub: &str, exp: u64, secret: &str) -> String {
    let claims = Claims {
        sub: sub.to_owned(),
        exp,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("sign test token")
}
