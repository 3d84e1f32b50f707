//! # GeoLab Core
//!
//! Core types, errors, and utilities for the GeoLab API.
//!
//! This crate provides foundational types used throughout the GeoLab
//! application:
//!
//! - [`errors`]: Application error types with HTTP response conversion
//! - [`password`]: Password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use geolab_core::errors::AppError;
//! use geolab_core::password::{hash_password, verify_password};
//!
//! let hash = hash_password("secure_password")?;
//! assert!(verify_password("secure_password", &hash)?);
//!
//! let error = AppError::not_found(anyhow::anyhow!("Project not found"));
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::AppError;
pub use password::{hash_password, verify_password};
