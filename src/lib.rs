//! # GeoLab API
//!
//! Backend for a geotechnical laboratory management system, built with
//! Rust and Axum. This crate carries the framework wiring around the
//! stateless authentication core in [`geolab_auth`]: every request is
//! examined exactly once by the authentication filter, which establishes
//! a request-scoped authentication context from a bearer token without
//! any server-side session storage.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── geolab-core/      # Errors, password hashing
//! ├── geolab-config/    # Environment-driven configuration
//! └── geolab-auth/      # Token issuing/verification core
//! src/
//! ├── identity.rs       # Identity resolution seam + in-memory store
//! ├── logging.rs        # Tracing setup and request logging
//! ├── middleware/       # Authentication filter and extractors
//! ├── modules/          # Feature modules (auth endpoints)
//! ├── router.rs         # Main application router
//! ├── state.rs          # Shared application state
//! └── validator.rs      # Request validation extractor
//! ```
//!
//! Each feature module follows a consistent structure: `controller.rs`
//! (HTTP handlers), `service.rs` (business logic), `model.rs` (DTOs),
//! `router.rs` (route wiring).
//!
//! ## Authentication
//!
//! - **Access token**: short-lived (default 15 minutes), presented as
//!   `Authorization: Bearer <token>` on every API request
//! - **Refresh token**: long-lived (default 14 days), exchanged at
//!   `/api/auth/refresh` for a fresh pair when the access token expires
//!
//! The two kinds are signed with independent secrets. An expired access
//! token is answered with status 401 and the body `TOKEN_EXPIRED`, telling
//! the client to run the refresh flow rather than a full re-login.
//!
//! ## Environment Variables
//!
//! ```bash
//! JWT_ACCESS_SECRET=...      # >= 32 bytes, required in production
//! JWT_REFRESH_SECRET=...     # >= 32 bytes, independent from access
//! JWT_ACCESS_EXPIRY_MS=900000
//! JWT_REFRESH_EXPIRY_MS=1209600000
//! JWT_CLOCK_SKEW_SECS=60
//! PUBLIC_PATH_PREFIXES=/health,/api/auth/signup,/api/auth/login,...
//! ```

pub mod identity;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;
pub mod validator;

// Re-export workspace crates for convenience
pub use geolab_auth;
pub use geolab_config;
pub use geolab_core;
