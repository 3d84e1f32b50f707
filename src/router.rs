use axum::{Router, middleware, routing::get};

use crate::logging::logging_middleware;
use crate::middleware::auth::authenticate;
use crate::modules::auth::router::init_auth_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/auth", init_auth_router())
        .with_state(state.clone())
        // One authentication pass per request, ahead of every handler
        .layer(middleware::from_fn_with_state(state, authenticate))
        .layer(middleware::from_fn(logging_middleware))
}

async fn health() -> &'static str {
    "OK"
}
