use std::time::Duration;

use jiff::{SignedDuration, Timestamp};

use mindlog_auth::error::AuthError;
use mindlog_auth::jwt::{ISSUER, issue_token, issue_token_at, validate_token};

const SECRET: &[u8] = b"test-secret-with-enough-entropy";
const HOUR: Duration = Duration::from_secs(3600);

#[test]
fn issued_token_validates() {
    let token = issue_token("user-42", SECRET, HOUR).unwrap();
    let claims = validate_token(&token, SECRET).unwrap();
    assert_eq!(claims.sub, "user-42");
    assert_eq!(claims.iss, ISSUER);
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[test]
fn wrong_secret_is_rejected() {
    let token = issue_token("user-42", SECRET, HOUR).unwrap();
    let err = validate_token(&token, b"another-secret").unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken(_)));
}

#[test]
fn expired_token_is_rejected() {
    let issued = Timestamp::now()
        .checked_sub(SignedDuration::from_hours(3))
        .unwrap();
    let token = issue_token_at("user-42", SECRET, HOUR, issued).unwrap();
    let err = validate_token(&token, SECRET).unwrap_err();
    assert!(matches!(err, AuthError::TokenExpired));
}

#[test]
fn garbage_is_rejected() {
    let err = validate_token("not.a.jwt", SECRET).unwrap_err();
    assert!(matches!(err, AuthError::InvalidToken(_) | AuthError::Jwt(_)));
}

#[test]
fn empty_secret_is_refused() {
    assert!(matches!(
        issue_token("user-42", b"", HOUR),
        Err(AuthError::EmptySecret)
    ));
    assert!(matches!(
        validate_token("x.y.z", b""),
        Err(AuthError::EmptySecret)
    ));
}
