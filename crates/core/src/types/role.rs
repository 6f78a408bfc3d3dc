//! Role names with a single, canonical comparison policy.
//!
//! The backend emits role names with inconsistent casing ("ADMIN",
//! "cliente", ...). All authorization decisions compare roles
//! case-insensitively; `Role` is the only comparison path, so nothing
//! else in the workspace can reintroduce a case-sensitive check.

use serde::{Deserialize, Serialize};

/// A role name as reported by the backend.
///
/// Equality and hashing are ASCII case-insensitive: `Role::new("cliente")`
/// equals `Role::new("CLIENTE")`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// Create a role from a backend-supplied name, preserving its casing.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The role name exactly as the backend sent it.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against a role name.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.0.eq_ignore_ascii_case(name)
    }

    /// True if any of `roles` matches any name in `allowed`.
    #[must_use]
    pub fn any_match(roles: &[Self], allowed: &[&str]) -> bool {
        roles
            .iter()
            .any(|role| allowed.iter().any(|name| role.matches(name)))
    }
}

impl PartialEq for Role {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for Role {}

impl std::hash::Hash for Role {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        for byte in self.0.bytes() {
            state.write_u8(byte.to_ascii_lowercase());
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Role {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for Role {
    fn from(name: String) -> Self {
        Self(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_case_insensitive() {
        assert_eq!(Role::new("cliente"), Role::new("CLIENTE"));
        assert_eq!(Role::new("Admin"), Role::new("aDmIn"));
        assert_ne!(Role::new("ADMIN"), Role::new("SUPERVISOR"));
    }

    #[test]
    fn matches_ignores_case() {
        assert!(Role::new("cliente").matches("CLIENTE"));
        assert!(!Role::new("cliente").matches("ADMIN"));
    }

    #[test]
    fn any_match_intersects() {
        let roles = vec![Role::new("cliente")];
        assert!(Role::any_match(&roles, &["ADMIN", "SUPERVISOR", "CLIENTE"]));
        assert!(!Role::any_match(&roles, &["ADMIN", "SUPERVISOR"]));
        assert!(!Role::any_match(&[], &["ADMIN"]));
    }

    #[test]
    fn serde_is_transparent() {
        let role: Role = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(role.as_str(), "ADMIN");
        assert_eq!(serde_json::to_string(&role).unwrap(), "\"ADMIN\"");
    }
}
