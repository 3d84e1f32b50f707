#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::Value;

use geolab_auth::{SigningKeys, TokenIssuer, TokenKind};
use geolab_config::{JwtConfig, PublicPaths};
use geolab_core::hash_password;

use geolab::identity::Identity;
use geolab::router::init_router;
use geolab::state::AppState;

pub const ACCESS_SECRET: &str = "test-access-secret-at-least-32-characters";
pub const REFRESH_SECRET: &str = "test-refresh-secret-at-least-32-characters";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        access_secret: ACCESS_SECRET.to_string(),
        refresh_secret: REFRESH_SECRET.to_string(),
        access_expiry_ms: 900_000,
        refresh_expiry_ms: 1_209_600_000,
        clock_skew_secs: 60,
    }
}

pub fn test_public_paths() -> PublicPaths {
    PublicPaths::new(
        [
            "/health",
            "/api/auth/signup",
            "/api/auth/login",
            "/api/auth/refresh",
            "/api/auth/logout",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect(),
    )
}

pub fn test_state() -> AppState {
    AppState::from_config(&test_jwt_config(), test_public_paths()).unwrap()
}

/// Registers an identity directly in the state's store, bypassing the
/// signup endpoint.
pub fn register_user(state: &AppState, username: &str, password: &str) {
    let registered = state.identities.register(Identity {
        username: username.to_string(),
        password_hash: hash_password(password).unwrap(),
        roles: vec!["user".to_string()],
    });
    assert!(registered, "user {} already registered", username);
}

pub fn setup_app(state: AppState) -> Router {
    init_router(state)
}

/// An access token whose window elapsed two minutes ago, signed with the
/// test access secret: beyond the 60s clock-skew leeway, so verification
/// classifies it as expired rather than merely stale.
pub fn expired_access_token(subject: &str) -> String {
    let keys = SigningKeys::from_config(&test_jwt_config()).unwrap();
    TokenIssuer::new(TokenKind::Access, keys.access().clone(), 60, -120_000)
        .generate(subject)
        .unwrap()
}

pub fn json_post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn get_with_bearer(uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
