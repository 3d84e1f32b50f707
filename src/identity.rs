use std::collections::HashMap;
use std::sync::RwLock;

use geolab_auth::Principal;

/// A known caller of the API: login name, password hash, and the role set
/// granted to it. Resolved identities populate the per-request
/// authentication context.
#[derive(Debug, Clone)]
pub struct Identity {
    pub username: String,
    pub password_hash: String,
    pub roles: Vec<String>,
}

impl Principal for Identity {
    fn username(&self) -> &str {
        &self.username
    }
}

/// Lookup capability the authentication filter consumes. Where identities
/// actually live (database, directory service, fixture data) is outside
/// the authentication core.
pub trait IdentityResolver: Send + Sync {
    fn resolve(&self, username: &str) -> Option<Identity>;
}

/// Process-local identity directory backing the signup/login endpoints
/// and the test suite.
#[derive(Debug, Default)]
pub struct InMemoryIdentityStore {
    identities: RwLock<HashMap<String, Identity>>,
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new identity. Returns `false` without overwriting when the
    /// username is already taken.
    pub fn register(&self, identity: Identity) -> bool {
        let mut identities = self
            .identities
            .write()
            .expect("identity store lock poisoned");

        if identities.contains_key(&identity.username) {
            return false;
        }
        identities.insert(identity.username.clone(), identity);
        true
    }
}

impl IdentityResolver for InMemoryIdentityStore {
    fn resolve(&self, username: &str) -> Option<Identity> {
        self.identities
            .read()
            .expect("identity store lock poisoned")
            .get(username)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(username: &str) -> Identity {
        Identity {
            username: username.to_string(),
            password_hash: "$2b$12$fake-hash".to_string(),
            roles: vec!["user".to_string()],
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let store = InMemoryIdentityStore::new();
        assert!(store.register(identity("lab-tech")));

        let resolved = store.resolve("lab-tech").unwrap();
        assert_eq!(resolved.username, "lab-tech");
        assert_eq!(resolved.roles, vec!["user".to_string()]);
    }

    #[test]
    fn test_resolve_unknown_is_none() {
        let store = InMemoryIdentityStore::new();
        assert!(store.resolve("nobody").is_none());
    }

    #[test]
    fn test_register_does_not_overwrite() {
        let store = InMemoryIdentityStore::new();
        assert!(store.register(identity("lab-tech")));

        let mut duplicate = identity("lab-tech");
        duplicate.roles = vec!["admin".to_string()];
        assert!(!store.register(duplicate));

        assert_eq!(
            store.resolve("lab-tech").unwrap().roles,
            vec!["user".to_string()]
        );
    }
}
