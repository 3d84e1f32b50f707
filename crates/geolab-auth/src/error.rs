use std::error::Error;
use std::fmt;

use jsonwebtoken::errors::Error as JwtError;

use crate::kind::TokenKind;

/// Outcome classification for token decoding and signing.
///
/// Callers are forced to handle expiration as its own branch: an expired
/// token is recoverable by the client through the refresh flow, while
/// every other failure is treated as absence of authentication.
#[derive(Debug)]
pub enum TokenError {
    /// Signature verified but the validity window has elapsed. Carries the
    /// original decode failure as cause.
    Expired(JwtError),
    /// Wrong key, corrupt payload, unsupported algorithm, tampering, or
    /// any other decode failure that is not plain expiration.
    Invalid(JwtError),
    /// Token could not be signed. Does not occur with well-formed HMAC key
    /// material.
    Signing(JwtError),
}

impl TokenError {
    pub fn is_expired(&self) -> bool {
        matches!(self, TokenError::Expired(_))
    }
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Expired(_) => write!(f, "token expired"),
            TokenError::Invalid(_) => write!(f, "invalid token"),
            TokenError::Signing(err) => write!(f, "failed to sign token: {}", err),
        }
    }
}

impl Error for TokenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TokenError::Expired(err) | TokenError::Invalid(err) | TokenError::Signing(err) => {
                Some(err)
            }
        }
    }
}

/// Fatal construction failure: a configured secret is too short to derive
/// a cryptographically sound HMAC-SHA-256 key. The process must not start.
#[derive(Debug)]
pub struct WeakKeyError {
    pub kind: TokenKind,
    pub len: usize,
    pub min: usize,
}

impl fmt::Display for WeakKeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} signing secret is {} bytes; at least {} bytes are required for HMAC-SHA-256",
            self.kind, self.len, self.min
        )
    }
}

impl Error for WeakKeyError {}
