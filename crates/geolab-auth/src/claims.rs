use serde::{Deserialize, Serialize};

/// Payload carried inside every signed token.
///
/// Timestamps are Unix seconds, signed so that an already-elapsed validity
/// window is representable (test fixtures issue tokens in the past).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the username the token was issued to.
    pub sub: String,
    /// Issued-at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}
