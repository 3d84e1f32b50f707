use std::env;

/// Default public prefixes: liveness probe plus the auth endpoints a client
/// must reach before it holds any token.
const DEFAULT_PUBLIC_PREFIXES: &[&str] = &[
    "/health",
    "/api/auth/signup",
    "/api/auth/login",
    "/api/auth/refresh",
    "/api/auth/logout",
];

/// Ordered set of path prefixes the authentication filter bypasses.
///
/// Requests whose path starts with any listed prefix proceed down the
/// pipeline with no identity resolution attempted.
#[derive(Clone, Debug)]
pub struct PublicPaths {
    prefixes: Vec<String>,
}

impl PublicPaths {
    pub fn from_env() -> Self {
        let prefixes = match env::var("PUBLIC_PATH_PREFIXES") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => DEFAULT_PUBLIC_PREFIXES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        };

        Self { prefixes }
    }

    pub fn new(prefixes: Vec<String>) -> Self {
        Self { prefixes }
    }

    pub fn matches(&self, path: &str) -> bool {
        self.prefixes.iter().any(|prefix| path.starts_with(prefix))
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }
}
