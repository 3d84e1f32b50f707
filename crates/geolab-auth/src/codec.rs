use chrono::Utc;
use jsonwebtoken::{Algorithm, Header, Validation, decode, encode};

use crate::claims::Claims;
use crate::error::TokenError;
use crate::keys::SigningKey;
use crate::kind::TokenKind;

/// Encodes and decodes claims under a single signing key.
///
/// A codec is bound to one [`TokenKind`] at construction and only ever
/// holds that kind's key, so cross-kind verification is impossible by
/// construction rather than by runtime checks.
///
/// Decoding applies the configured clock-skew leeway to the expiration
/// check, absorbing drift between issuing and verifying hosts.
pub struct ClaimsCodec {
    kind: TokenKind,
    key: SigningKey,
    header: Header,
    validation: Validation,
}

impl ClaimsCodec {
    pub fn new(kind: TokenKind, key: SigningKey, clock_skew_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = clock_skew_secs;

        Self {
            kind,
            key,
            header: Header::new(Algorithm::HS256),
            validation,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Builds a signed token for `subject` valid for `ttl_ms` from now.
    pub fn encode(&self, subject: &str, ttl_ms: i64) -> Result<String, TokenError> {
        let now_ms = Utc::now().timestamp_millis();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now_ms.div_euclid(1000),
            exp: (now_ms + ttl_ms).div_euclid(1000),
        };

        encode(&self.header, &claims, self.key.encoding()).map_err(TokenError::Signing)
    }

    /// Verifies signature and structure, returning the claims.
    ///
    /// Expiration is a distinct, matchable outcome: a token whose signature
    /// verifies but whose window has elapsed yields [`TokenError::Expired`]
    /// with the original cause. Every other failure (wrong key, corrupt
    /// payload, unsupported algorithm) yields [`TokenError::Invalid`].
    pub fn decode(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, self.key.decoding(), &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired(e),
                _ => TokenError::Invalid(e),
            })
    }
}
