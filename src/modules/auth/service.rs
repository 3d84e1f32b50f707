use anyhow::anyhow;
use tracing::instrument;

use geolab_auth::{TokenIssuer, TokenPair, TokenPairGenerator, TokenValidator};
use geolab_core::{AppError, hash_password, verify_password};

use crate::identity::{Identity, IdentityResolver, InMemoryIdentityStore};

use super::model::{LoginRequest, RefreshRequest, SignupRequest, UserResponse};

/// Role granted to self-registered identities.
const DEFAULT_ROLE: &str = "user";

pub struct AuthService;

impl AuthService {
    #[instrument(skip_all)]
    pub fn signup(
        identities: &InMemoryIdentityStore,
        dto: SignupRequest,
    ) -> Result<UserResponse, AppError> {
        let password_hash = hash_password(&dto.password)?;

        let identity = Identity {
            username: dto.username,
            password_hash,
            roles: vec![DEFAULT_ROLE.to_string()],
        };

        if !identities.register(identity.clone()) {
            return Err(AppError::bad_request(anyhow!("Username already exists")));
        }

        Ok(UserResponse {
            username: identity.username,
            roles: identity.roles,
        })
    }

    #[instrument(skip_all)]
    pub fn login(
        identities: &InMemoryIdentityStore,
        token_pairs: &TokenPairGenerator,
        dto: LoginRequest,
    ) -> Result<TokenPair, AppError> {
        // Same response for unknown user and wrong password: do not leak
        // which usernames exist.
        let identity = identities
            .resolve(&dto.username)
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid username or password")))?;

        if !verify_password(&dto.password, &identity.password_hash)? {
            return Err(AppError::unauthorized(anyhow!(
                "Invalid username or password"
            )));
        }

        token_pairs
            .generate(&identity.username)
            .map_err(AppError::internal)
    }

    /// Exchanges a fresh refresh token for a new pair. The subject must
    /// still resolve to a known identity; the old pair stays valid until
    /// it expires on its own (no revocation list in a stateless scheme).
    #[instrument(skip_all)]
    pub fn refresh(
        identities: &InMemoryIdentityStore,
        refresh_tokens: &TokenIssuer,
        validator: &TokenValidator,
        token_pairs: &TokenPairGenerator,
        dto: RefreshRequest,
    ) -> Result<TokenPair, AppError> {
        if !validator.is_valid_refresh_token(&dto.refresh_token) {
            return Err(AppError::unauthorized(anyhow!("Invalid refresh token")));
        }

        let subject = refresh_tokens
            .extract_subject(&dto.refresh_token)
            .map_err(|_| AppError::unauthorized(anyhow!("Invalid refresh token")))?;

        let identity = identities
            .resolve(&subject)
            .ok_or_else(|| AppError::unauthorized(anyhow!("Invalid refresh token")))?;

        token_pairs
            .generate(&identity.username)
            .map_err(AppError::internal)
    }
}
