//! # GeoLab Auth
//!
//! Token issuing and verification core for the GeoLab API.
//!
//! This crate implements the stateless dual-token scheme used for
//! authentication: a short-lived **access token** presented on every API
//! request, and a long-lived **refresh token** exchanged for a new pair
//! when the access token expires. The two kinds are signed with
//! independent keys; a token's kind is established purely by which
//! verifier decodes it, so an access token can never pass refresh
//! verification or vice versa.
//!
//! Components:
//!
//! - [`keys`]: signing key material derived once from configured secrets
//! - [`claims`]: the signed payload (subject, issued-at, expiration)
//! - [`codec`]: encode/decode under one key, classifying expiration
//!   distinctly from every other decode failure
//! - [`issuer`]: kind-bound issuer/verifier pairs
//! - [`pair`]: matched access+refresh pair generation
//! - [`validator`]: access-token-vs-identity and refresh-freshness checks
//!
//! # Example
//!
//! ```ignore
//! use geolab_auth::{SigningKeys, TokenIssuer, TokenPairGenerator};
//! use geolab_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let keys = SigningKeys::from_config(&config)?;
//!
//! let access = TokenIssuer::access(&keys, &config);
//! let subject = access.extract_subject(&access.generate("lab-tech")?)?;
//! assert_eq!(subject, "lab-tech");
//! ```

pub mod claims;
pub mod codec;
pub mod error;
pub mod issuer;
pub mod keys;
pub mod kind;
pub mod pair;
pub mod validator;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use codec::ClaimsCodec;
pub use error::{TokenError, WeakKeyError};
pub use issuer::TokenIssuer;
pub use keys::{SigningKey, SigningKeys};
pub use kind::TokenKind;
pub use pair::{TokenPair, TokenPairGenerator};
pub use validator::{Principal, TokenValidator};
