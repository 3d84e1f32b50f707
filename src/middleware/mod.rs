//! Middleware for request processing.
//!
//! # Authentication Flow
//!
//! 1. The [`auth::authenticate`] filter runs once per request: public
//!    paths and token-less requests pass straight through; a bearer token
//!    is verified and, when it checks out against a resolved identity, an
//!    [`auth::AuthContext`] is installed in the request extensions.
//! 2. An expired access token halts the request with status 401 and the
//!    body `TOKEN_EXPIRED` so clients know to run the refresh flow.
//! 3. Handlers that require authentication take the [`auth::CurrentUser`]
//!    extractor, which rejects with a generic 401 when no context was
//!    installed.

pub mod auth;
