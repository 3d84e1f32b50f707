use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use geolab_auth::TokenPair;
use geolab_core::AppError;

use crate::middleware::auth::CurrentUser;
use crate::state::AppState;
use crate::validator::ValidatedJson;

use super::model::{
    LoginRequest, MessageResponse, RefreshRequest, SignupRequest, UserResponse,
};
use super::service::AuthService;

/// Register a new identity
#[instrument(skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<SignupRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let user = AuthService::signup(&state.identities, dto)?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Login and receive an access/refresh token pair
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let pair = AuthService::login(&state.identities, &state.token_pairs, dto)?;
    Ok(Json(pair))
}

/// Exchange a refresh token for a fresh pair
#[instrument(skip_all)]
pub async fn refresh(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<RefreshRequest>,
) -> Result<Json<TokenPair>, AppError> {
    let pair = AuthService::refresh(
        &state.identities,
        &state.refresh_tokens,
        &state.validator,
        &state.token_pairs,
        dto,
    )?;
    Ok(Json(pair))
}

/// Stateless logout acknowledgement.
///
/// Issued tokens stay valid until they expire on their own; clients log
/// out by discarding the pair. The endpoint exists so clients have a
/// uniform call to clear their session against.
#[instrument(skip_all)]
pub async fn logout() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Logged out".to_string(),
    })
}

/// Return the caller's authentication context
#[instrument(skip_all)]
pub async fn me(CurrentUser(context): CurrentUser) -> Json<UserResponse> {
    Json(UserResponse {
        username: context.username,
        roles: context.roles,
    })
}
