use std::env;

/// JWT signing configuration.
///
/// Access and refresh tokens are signed with *independent* secrets so that
/// leaking one signing context never allows forging tokens of the other
/// kind. The defaults are insecure placeholders for local development and
/// MUST be overridden in production.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    /// Access token lifetime in milliseconds.
    pub access_expiry_ms: i64,
    /// Refresh token lifetime in milliseconds.
    pub refresh_expiry_ms: i64,
    /// Allowed clock drift between issuing and verifying hosts, in seconds.
    pub clock_skew_secs: u64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            access_secret: env::var("JWT_ACCESS_SECRET")
                .unwrap_or_else(|_| "default-access-secret-please-change".to_string()),
            refresh_secret: env::var("JWT_REFRESH_SECRET")
                .unwrap_or_else(|_| "default-refresh-secret-please-change".to_string()),
            access_expiry_ms: env::var("JWT_ACCESS_EXPIRY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(900_000), // 15 minutes
            refresh_expiry_ms: env::var("JWT_REFRESH_EXPIRY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(1_209_600_000), // 14 days
            clock_skew_secs: env::var("JWT_CLOCK_SKEW_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_env_unset() {
        // from_env falls back to documented defaults for unset variables
        let config = JwtConfig {
            access_secret: "default-access-secret-please-change".to_string(),
            refresh_secret: "default-refresh-secret-please-change".to_string(),
            access_expiry_ms: 900_000,
            refresh_expiry_ms: 1_209_600_000,
            clock_skew_secs: 60,
        };

        assert!(config.access_expiry_ms < config.refresh_expiry_ms);
        assert_ne!(config.access_secret, config.refresh_secret);
    }
}
