//! HS256 token codec for the gateway's bearer tokens.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{validate_claims, Claims, TokenValidationError};
use crate::roles::Role;

/// Token lifetime from issue.
const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("invalid token")]
    Invalid,

    #[error("token has expired")]
    Expired,

    #[error("token encoding failed")]
    Encoding,
}

/// Issues and verifies HS256 tokens with a shared secret.
///
/// Time-window checks are delegated to [`validate_claims`] with a caller
/// supplied clock, so verification stays deterministic under test.
pub struct Hs256TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Hs256TokenCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn issue(&self, email: &str, role: Role, now: DateTime<Utc>) -> Result<String, TokenError> {
        let claims = Claims {
            sub: email.to_string(),
            role,
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|_| TokenError::Encoding)
    }

    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // The codec owns the time-window policy; see validate_claims.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();

        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;

        validate_claims(&data.claims, now).map_err(|e| match e {
            TokenValidationError::Expired => TokenError::Expired,
            TokenValidationError::NotYetValid | TokenValidationError::InvalidTimeWindow => {
                TokenError::Invalid
            }
        })?;

        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_verify_roundtrip() {
        let codec = Hs256TokenCodec::new(b"test-secret");
        let now = Utc::now();

        let token = codec.issue("admin@sweetshop.test", Role::Admin, now).unwrap();
        let claims = codec.verify(&token, now).unwrap();

        assert_eq!(claims.sub, "admin@sweetshop.test");
        assert_eq!(claims.role, Role::Admin);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_HOURS * 3600);
    }

    #[test]
    fn rejects_a_token_signed_with_another_secret() {
        let codec = Hs256TokenCodec::new(b"test-secret");
        let other = Hs256TokenCodec::new(b"other-secret");
        let now = Utc::now();

        let token = other.issue("user@sweetshop.test", Role::User, now).unwrap();
        assert_eq!(codec.verify(&token, now), Err(TokenError::Invalid));
    }

    #[test]
    fn rejects_an_expired_token() {
        let codec = Hs256TokenCodec::new(b"test-secret");
        let issued = Utc::now() - Duration::hours(TOKEN_TTL_HOURS + 1);

        let token = codec.issue("user@sweetshop.test", Role::User, issued).unwrap();
        assert_eq!(
            codec.verify(&token, Utc::now()),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn rejects_garbage() {
        let codec = Hs256TokenCodec::new(b"test-secret");
        assert_eq!(
            codec.verify("not-a-token", Utc::now()),
            Err(TokenError::Invalid)
        );
    }
}
