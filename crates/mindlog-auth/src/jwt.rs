use std::time::Duration;

use jiff::Timestamp;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AuthError;

pub const ISSUER: &str = "mindlog";

/// Claims carried by an API access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

/// Sign an HS256 token for `user_id`, valid for `ttl` from now.
pub fn issue_token(user_id: &str, secret: &[u8], ttl: Duration) -> Result<String, AuthError> {
    issue_token_at(user_id, secret, ttl, Timestamp::now())
}

/// Like [`issue_token`] with an explicit issue time.
pub fn issue_token_at(
    user_id: &str,
    secret: &[u8],
    ttl: Duration,
    issued_at: Timestamp,
) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::EmptySecret);
    }
    let iat = issued_at.as_second();
    let ttl_secs = i64::try_from(ttl.as_secs())
        .map_err(|_| AuthError::InvalidToken(format!("ttl too large: {ttl:?}")))?;
    let claims = Claims {
        sub: user_id.to_string(),
        iss: ISSUER.to_string(),
        iat,
        exp: iat.saturating_add(ttl_secs),
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret),
    )?;
    debug!(user_id, exp = claims.exp, "issued access token");
    Ok(token)
}

/// Verify signature, issuer and expiry, returning the claims.
pub fn validate_token(token: &str, secret: &[u8]) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::EmptySecret);
    }

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[ISSUER]);
    validation.set_required_spec_claims(&["exp", "iss", "sub"]);
    validation.validate_exp = true;

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)?;

    if token_data.claims.sub.trim().is_empty() {
        return Err(AuthError::InvalidToken("empty subject".to_string()));
    }

    Ok(token_data.claims)
}
