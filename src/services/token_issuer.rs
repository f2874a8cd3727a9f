//! Signed, time-bounded bearer tokens.
//!
//! Tokens are HS256 JWTs carrying `{sub, iat, exp}`. The signing secret is
//! handed in once at construction and never read from globals.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::Config;
use common::{AppError, AppResult};

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identity key of the account (its email)
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token and the instant it stops being valid
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Why a token was refused. Callers treat every variant the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidToken {
    #[error("token is malformed")]
    Malformed,
    #[error("token signature does not match")]
    BadSignature,
    #[error("token has expired")]
    Expired,
}

impl From<InvalidToken> for AppError {
    fn from(_: InvalidToken) -> Self {
        AppError::Unauthorized
    }
}

/// Issues and validates session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    session_ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[REDACTED]")
            .field("session_ttl", &self.session_ttl)
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(secret: &[u8], session_ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            session_ttl,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret_bytes(), config.session_ttl())
    }

    /// Lifetime used by [`TokenIssuer::issue_default`]
    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Sign a token for `subject` that expires after `ttl`.
    pub fn issue(&self, subject: &str, ttl: Duration) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let exp = (now + ttl).timestamp();
        // Whole seconds, so the reported expiry matches the `exp` claim
        let expires_at = DateTime::from_timestamp(exp, 0)
            .ok_or_else(|| AppError::internal("Token expiry out of range"))?;

        let claims = SessionClaims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Sign a token for `subject` with the configured session lifetime.
    pub fn issue_default(&self, subject: &str) -> AppResult<IssuedToken> {
        self.issue(subject, self.session_ttl)
    }

    /// Check signature and expiry, returning the claims on success.
    ///
    /// A token is valid only while `now < exp`.
    pub fn validate(&self, token: &str) -> Result<SessionClaims, InvalidToken> {
        let claims = decode::<SessionClaims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => InvalidToken::Expired,
                ErrorKind::InvalidSignature => InvalidToken::BadSignature,
                _ => InvalidToken::Malformed,
            })?;

        // jsonwebtoken still accepts a token during its final second
        if Utc::now().timestamp() >= claims.exp {
            return Err(InvalidToken::Expired);
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"a-test-secret-that-is-long-enough!!";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, Duration::minutes(30))
    }

    #[test]
    fn test_issue_then_validate_returns_subject() {
        let issuer = issuer();
        let issued = issuer.issue("a@b.com", Duration::minutes(5)).unwrap();

        let claims = issuer.validate(&issued.token).unwrap();
        assert_eq!(claims.sub, "a@b.com");
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_default_ttl_is_thirty_minutes() {
        let issuer = issuer();
        let before = Utc::now();
        let issued = issuer.issue_default("a@b.com").unwrap();

        let ttl = issued.expires_at - before;
        assert!(ttl >= Duration::minutes(30) - Duration::seconds(1));
        assert!(ttl <= Duration::minutes(30) + Duration::seconds(1));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let issuer = issuer();
        let issued = issuer.issue("a@b.com", Duration::seconds(-10)).unwrap();

        assert_eq!(issuer.validate(&issued.token), Err(InvalidToken::Expired));
    }

    #[test]
    fn test_zero_ttl_token_is_already_expired() {
        let issuer = issuer();
        let issued = issuer.issue("a@b.com", Duration::zero()).unwrap();

        assert_eq!(issuer.validate(&issued.token), Err(InvalidToken::Expired));
    }

    #[test]
    fn test_token_is_rejected_once_expiry_passes() {
        let issuer = issuer();
        let issued = issuer.issue("a@b.com", Duration::milliseconds(300)).unwrap();

        std::thread::sleep(std::time::Duration::from_millis(400));

        assert!(Utc::now() > issued.expires_at);
        assert_eq!(issuer.validate(&issued.token), Err(InvalidToken::Expired));
    }

    #[test]
    fn test_reported_expiry_matches_exp_claim() {
        let issuer = issuer();
        let issued = issuer.issue("a@b.com", Duration::minutes(5)).unwrap();

        let claims = issuer.validate(&issued.token).unwrap();
        assert_eq!(issued.expires_at.timestamp_subsec_nanos(), 0);
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let other = TokenIssuer::new(b"another-secret-that-is-long-enough!", Duration::minutes(30));
        let issued = other.issue_default("a@b.com").unwrap();

        assert_eq!(issuer().validate(&issued.token), Err(InvalidToken::BadSignature));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let issuer = issuer();
        let issued = issuer.issue_default("a@b.com").unwrap();

        // Flip one character of the signature segment
        let mut bytes = issued.token.into_bytes();
        let last = bytes.len() - 2;
        bytes[last] = if bytes[last] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert_eq!(issuer.validate(&tampered), Err(InvalidToken::BadSignature));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(issuer().validate("not-a-token"), Err(InvalidToken::Malformed));
        assert_eq!(issuer().validate(""), Err(InvalidToken::Malformed));
    }

    #[test]
    fn test_invalid_token_maps_to_unauthorized() {
        assert!(matches!(
            AppError::from(InvalidToken::Expired),
            AppError::Unauthorized
        ));
    }

    #[test]
    fn test_debug_hides_secret() {
        let debug = format!("{:?}", issuer());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("a-test-secret"));
    }
}
