use jsonwebtoken::{DecodingKey, EncodingKey};

use geolab_config::JwtConfig;

use crate::error::WeakKeyError;
use crate::kind::TokenKind;

/// Minimum secret length for HMAC-SHA-256, per RFC 7518: the key must be at
/// least as long as the hash output.
pub const MIN_HMAC_SECRET_BYTES: usize = 32;

/// One symmetric signing context: the encoding and decoding halves derived
/// from the same secret. Immutable for process lifetime, never serialized.
#[derive(Clone)]
pub struct SigningKey {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl SigningKey {
    fn from_secret(kind: TokenKind, secret: &str) -> Result<Self, WeakKeyError> {
        let bytes = secret.as_bytes();
        if bytes.len() < MIN_HMAC_SECRET_BYTES {
            return Err(WeakKeyError {
                kind,
                len: bytes.len(),
                min: MIN_HMAC_SECRET_BYTES,
            });
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        })
    }

    pub fn encoding(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding(&self) -> &DecodingKey {
        &self.decoding
    }
}

impl std::fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningKey").finish_non_exhaustive()
    }
}

/// Holds the two independent signing keys. Compromise of one signing
/// context must not allow forging tokens of the other kind, so the access
/// and refresh secrets are never allowed to share key material derivation.
#[derive(Clone, Debug)]
pub struct SigningKeys {
    access: SigningKey,
    refresh: SigningKey,
}

impl SigningKeys {
    pub fn from_config(config: &JwtConfig) -> Result<Self, WeakKeyError> {
        Ok(Self {
            access: SigningKey::from_secret(TokenKind::Access, &config.access_secret)?,
            refresh: SigningKey::from_secret(TokenKind::Refresh, &config.refresh_secret)?,
        })
    }

    pub fn access(&self) -> &SigningKey {
        &self.access
    }

    pub fn refresh(&self) -> &SigningKey {
        &self.refresh
    }
}
