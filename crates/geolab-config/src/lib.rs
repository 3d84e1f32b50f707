//! # GeoLab Config
//!
//! Configuration types for the GeoLab API.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`jwt`]: JWT authentication configuration (signing secrets, token
//!   lifetimes, clock-skew tolerance)
//! - [`security`]: Public path allow-list consulted by the authentication
//!   filter
//!
//! # Example
//!
//! ```ignore
//! use geolab_config::{JwtConfig, PublicPaths};
//!
//! let jwt_config = JwtConfig::from_env();
//! let public_paths = PublicPaths::from_env();
//! ```

pub mod jwt;
pub mod security;

// Re-export commonly used types at crate root
pub use jwt::JwtConfig;
pub use security::PublicPaths;
