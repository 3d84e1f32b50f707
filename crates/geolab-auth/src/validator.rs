use std::sync::Arc;

use crate::error::TokenError;
use crate::issuer::TokenIssuer;

/// The slice of an identity this core needs: its login name. Identity
/// storage and lookup live outside the crate; callers hand in whatever
/// resolved-identity type they use.
pub trait Principal {
    fn username(&self) -> &str;
}

/// Cross-checks presented tokens against resolved identities.
#[derive(Clone)]
pub struct TokenValidator {
    access: Arc<TokenIssuer>,
    refresh: Arc<TokenIssuer>,
}

impl TokenValidator {
    pub fn new(access: Arc<TokenIssuer>, refresh: Arc<TokenIssuer>) -> Self {
        Self { access, refresh }
    }

    /// `Ok(true)` iff the access token's subject exactly equals the
    /// identity's username and the token is not expired.
    ///
    /// Subject mismatch is `Ok(false)` — "invalid" under this boolean
    /// contract. [`TokenError::Expired`] propagates as a hard failure so
    /// the filter layer can turn it into a client-actionable signal
    /// instead of a silent rejection; so do non-expiration decode errors.
    pub fn is_valid_access_token_for_user(
        &self,
        token: &str,
        user: &impl Principal,
    ) -> Result<bool, TokenError> {
        let subject = self.access.extract_subject(token)?;
        Ok(subject == user.username() && !self.access.is_expired(token)?)
    }

    /// Freshness-only check for refresh tokens: true iff the token decodes
    /// under the refresh key and its window has not elapsed. Matching the
    /// subject against an identity is the refresh handler's job, since
    /// refresh flows run without an authenticated context.
    pub fn is_valid_refresh_token(&self, token: &str) -> bool {
        matches!(self.refresh.is_expired(token), Ok(false))
    }
}
