use jsonwebtoken::errors::ErrorKind;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("signing secret must not be empty")]
    EmptySecret,

    #[error("JWT error: {0}")]
    Jwt(jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidToken
            | ErrorKind::InvalidSignature
            | ErrorKind::InvalidIssuer
            | ErrorKind::InvalidAlgorithm
            | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidToken(err.to_string()),
            _ => AuthError::Jwt(err),
        }
    }
}
