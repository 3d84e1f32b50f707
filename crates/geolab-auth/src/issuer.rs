use chrono::Utc;

use geolab_config::JwtConfig;

use crate::codec::ClaimsCodec;
use crate::error::TokenError;
use crate::keys::{SigningKey, SigningKeys};
use crate::kind::TokenKind;

/// Issues and verifies tokens of one kind.
///
/// The access and refresh issuers are structurally identical, differing
/// only in the key they are bound to and their configured TTL. An issuer
/// never sees the other kind's key.
pub struct TokenIssuer {
    codec: ClaimsCodec,
    ttl_ms: i64,
}

impl TokenIssuer {
    pub fn new(kind: TokenKind, key: SigningKey, clock_skew_secs: u64, ttl_ms: i64) -> Self {
        Self {
            codec: ClaimsCodec::new(kind, key, clock_skew_secs),
            ttl_ms,
        }
    }

    /// Access-token issuer: short TTL (default 15 minutes).
    pub fn access(keys: &SigningKeys, config: &JwtConfig) -> Self {
        Self::new(
            TokenKind::Access,
            keys.access().clone(),
            config.clock_skew_secs,
            config.access_expiry_ms,
        )
    }

    /// Refresh-token issuer: long TTL (default 14 days).
    pub fn refresh(keys: &SigningKeys, config: &JwtConfig) -> Self {
        Self::new(
            TokenKind::Refresh,
            keys.refresh().clone(),
            config.clock_skew_secs,
            config.refresh_expiry_ms,
        )
    }

    pub fn kind(&self) -> TokenKind {
        self.codec.kind()
    }

    pub fn generate(&self, subject: &str) -> Result<String, TokenError> {
        self.codec.encode(subject, self.ttl_ms)
    }

    /// Decodes the token and returns its subject. [`TokenError::Expired`]
    /// propagates so callers can distinguish "go refresh" from "not a
    /// credential at all".
    pub fn extract_subject(&self, token: &str) -> Result<String, TokenError> {
        Ok(self.codec.decode(token)?.sub)
    }

    pub fn extract_expiration(&self, token: &str) -> Result<i64, TokenError> {
        Ok(self.codec.decode(token)?.exp)
    }

    /// Whether the token's expiration has passed.
    ///
    /// "Expired" is exactly the condition being asked about, so a decode
    /// that fails with [`TokenError::Expired`] answers `Ok(true)` instead
    /// of propagating. Other decode failures still propagate: a malformed
    /// token has no expiration to report on.
    ///
    /// The comparison against the current time is exact; clock-skew leeway
    /// applies only inside decoding. A token expired within the leeway
    /// window therefore still decodes but reports expired here.
    pub fn is_expired(&self, token: &str) -> Result<bool, TokenError> {
        match self.codec.decode(token) {
            Ok(claims) => Ok(claims.exp < Utc::now().timestamp()),
            Err(TokenError::Expired(_)) => Ok(true),
            Err(err) => Err(err),
        }
    }
}
