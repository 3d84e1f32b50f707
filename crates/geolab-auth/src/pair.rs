use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::issuer::TokenIssuer;

/// A matched access+refresh pair issued to one subject.
///
/// The two tokens share the subject but nothing else: independent signing
/// keys, independent expirations, no stored cross-reference. Either can be
/// lost or expire on its own; the refresh flow simply issues a fresh pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
}

/// Orchestrates the two issuers to produce a [`TokenPair`] for a newly
/// authenticated or refreshed subject.
#[derive(Clone)]
pub struct TokenPairGenerator {
    access: Arc<TokenIssuer>,
    refresh: Arc<TokenIssuer>,
}

impl TokenPairGenerator {
    pub fn new(access: Arc<TokenIssuer>, refresh: Arc<TokenIssuer>) -> Self {
        Self { access, refresh }
    }

    pub fn generate(&self, subject: &str) -> Result<TokenPair, TokenError> {
        let access_token = self.access.generate(subject)?;
        let refresh_token = self.refresh.generate(subject)?;

        Ok(TokenPair {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
        })
    }
}
