use anyhow::anyhow;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{Method, StatusCode, header, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use geolab_auth::TokenError;
use geolab_core::AppError;

use crate::identity::{Identity, IdentityResolver};
use crate::state::AppState;

/// Machine-readable body for the expired-access-token rejection. Clients
/// match on it to run the refresh flow instead of a full re-login.
pub const TOKEN_EXPIRED_BODY: &str = "TOKEN_EXPIRED";

/// Request-scoped record of who is making this call and what they may do.
///
/// Installed at most once per request by [`authenticate`] and read-only
/// for the rest of the pipeline.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub username: String,
    pub roles: Vec<String>,
}

impl AuthContext {
    fn from_identity(identity: &Identity) -> Self {
        Self {
            username: identity.username.clone(),
            roles: identity.roles.clone(),
        }
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }
}

/// The per-request authentication filter.
///
/// - Preflight requests and configured public paths bypass entirely.
/// - Requests without a bearer token proceed unauthenticated; whether
///   that is acceptable is the downstream authorization layer's call.
/// - An expired access token halts the pipeline with 401/`TOKEN_EXPIRED`.
/// - Every other verification failure (bad signature, unknown subject,
///   subject mismatch) also proceeds unauthenticated, with no distinct
///   client signal that would leak which identities exist.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    if req.method() == Method::OPTIONS || state.public_paths.matches(req.uri().path()) {
        return next.run(req).await;
    }

    let Some(token) = bearer_token(&req) else {
        return next.run(req).await;
    };

    match state.access_tokens.extract_subject(&token) {
        Ok(subject) => {
            // Installed at most once per request: if an earlier pipeline
            // stage already authenticated this request, leave its context
            // untouched.
            if req.extensions().get::<AuthContext>().is_none() {
                match state.identities.resolve(&subject) {
                    Some(identity) => {
                        match state.validator.is_valid_access_token_for_user(&token, &identity) {
                            Ok(true) => {
                                req.extensions_mut().insert(AuthContext::from_identity(&identity));
                            }
                            Ok(false) => {
                                debug!(subject = %subject, "access token failed validation");
                            }
                            Err(err) if err.is_expired() => {
                                warn!(subject = %subject, "access token expired");
                                return token_expired_response();
                            }
                            Err(err) => {
                                debug!(subject = %subject, error = %err, "access token rejected");
                            }
                        }
                    }
                    None => {
                        debug!(subject = %subject, "token subject does not resolve to an identity");
                    }
                }
            }

            next.run(req).await
        }
        Err(TokenError::Expired(_)) => {
            warn!(path = %req.uri().path(), "rejecting request with expired access token");
            token_expired_response()
        }
        Err(err) => {
            debug!(error = %err, "unusable bearer token, proceeding unauthenticated");
            next.run(req).await
        }
    }
}

fn token_expired_response() -> Response {
    (StatusCode::UNAUTHORIZED, TOKEN_EXPIRED_BODY).into_response()
}

fn bearer_token(req: &Request) -> Option<String> {
    req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}

/// Extractor for handlers that require an authenticated caller.
///
/// Rejects with a generic 401 (not `TOKEN_EXPIRED`) when the filter did
/// not install a context for this request.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub AuthContext);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| AppError::unauthorized(anyhow!("Authentication required")))
    }
}
