use std::sync::Arc;

use geolab_auth::{SigningKeys, TokenIssuer, TokenPairGenerator, TokenValidator, WeakKeyError};
use geolab_config::{JwtConfig, PublicPaths};

use crate::identity::InMemoryIdentityStore;

/// Shared application state. Everything here is immutable after
/// construction (the identity store mutates only behind its own lock), so
/// cloning per request is cheap and lock-free on the hot path.
#[derive(Clone)]
pub struct AppState {
    pub access_tokens: Arc<TokenIssuer>,
    pub refresh_tokens: Arc<TokenIssuer>,
    pub token_pairs: TokenPairGenerator,
    pub validator: TokenValidator,
    pub identities: Arc<InMemoryIdentityStore>,
    pub public_paths: PublicPaths,
}

impl AppState {
    /// Wires the token components from the given configuration.
    ///
    /// Fails when a configured signing secret is too weak; `main` treats
    /// that as fatal and refuses to start.
    pub fn from_config(
        jwt_config: &JwtConfig,
        public_paths: PublicPaths,
    ) -> Result<Self, WeakKeyError> {
        let keys = SigningKeys::from_config(jwt_config)?;
        let access = Arc::new(TokenIssuer::access(&keys, jwt_config));
        let refresh = Arc::new(TokenIssuer::refresh(&keys, jwt_config));

        Ok(Self {
            token_pairs: TokenPairGenerator::new(access.clone(), refresh.clone()),
            validator: TokenValidator::new(access.clone(), refresh.clone()),
            access_tokens: access,
            refresh_tokens: refresh,
            identities: Arc::new(InMemoryIdentityStore::new()),
            public_paths,
        })
    }
}

pub fn init_app_state() -> Result<AppState, WeakKeyError> {
    AppState::from_config(&JwtConfig::from_env(), PublicPaths::from_env())
}
