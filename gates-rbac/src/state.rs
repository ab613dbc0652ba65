//! # Auth state
//!
//! The roles and permissions held by the current session, plus the super
//! role name and whether persistence is active.
//!
//! Lists are replaced wholesale and never merged. Order is preserved so that
//! getters return exactly what was set.

use serde::{Deserialize, Serialize};

/// Role and permission state for a single session.
///
/// # Example
///
/// ```
/// use gates_rbac::{AuthState, Query};
///
/// let state = AuthState::new(Some("admin".to_string()), false)
///     .with_roles(["editor"])
///     .with_permissions(["posts.*"]);
///
/// assert!(state.has_role("editor"));
/// assert!(state.has_permission("posts.delete"));
/// assert!(!state.is_super_user());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// Role names held by the user.
    roles: Vec<String>,
    /// Permission strings held by the user; may contain wildcard patterns.
    permissions: Vec<String>,
    /// Role that bypasses every check when held.
    #[serde(skip_serializing_if = "Option::is_none")]
    super_role: Option<String>,
    /// Whether updates are written to a store.
    persistence_enabled: bool,
}

impl AuthState {
    /// Create an empty state.
    ///
    /// # Arguments
    ///
    /// * `super_role` - Optional bypass role name
    /// * `persistence_enabled` - Whether updates are persisted
    pub fn new(super_role: Option<String>, persistence_enabled: bool) -> Self {
        Self {
            roles: Vec::new(),
            permissions: Vec::new(),
            super_role,
            persistence_enabled,
        }
    }

    /// Builder-style constructor for the initial role list.
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style constructor for the initial permission list.
    pub fn with_permissions<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions = permissions.into_iter().map(Into::into).collect();
        self
    }

    /// Roles in the order they were set.
    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    /// Permissions in the order they were set.
    pub fn permissions(&self) -> &[String] {
        &self.permissions
    }

    /// The configured super role, if any.
    pub fn super_role(&self) -> Option<&str> {
        self.super_role.as_deref()
    }

    /// Whether updates are persisted.
    pub fn persistence_enabled(&self) -> bool {
        self.persistence_enabled
    }

    /// Check if the role list contains `role` exactly.
    pub fn contains_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub(crate) fn replace_roles(&mut self, roles: Vec<String>) {
        self.roles = roles;
    }

    pub(crate) fn replace_permissions(&mut self, permissions: Vec<String>) {
        self.permissions = permissions;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_empty() {
        let state = AuthState::new(None, false);
        assert!(state.roles().is_empty());
        assert!(state.permissions().is_empty());
        assert!(state.super_role().is_none());
        assert!(!state.persistence_enabled());
    }

    #[test]
    fn test_order_preserved() {
        let state = AuthState::default().with_roles(["viewer", "admin", "editor"]);
        assert_eq!(state.roles(), ["viewer", "admin", "editor"]);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut state = AuthState::default().with_roles(["admin", "editor"]);
        state.replace_roles(vec!["viewer".to_string()]);
        assert_eq!(state.roles(), ["viewer"]);
        assert!(!state.contains_role("admin"));

        state.replace_permissions(vec!["posts.read".to_string()]);
        state.replace_permissions(Vec::new());
        assert!(state.permissions().is_empty());
    }

    #[test]
    fn test_serde_shape() {
        let state = AuthState::new(Some("admin".to_string()), true).with_roles(["editor"]);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["roles"], serde_json::json!(["editor"]));
        assert_eq!(json["super_role"], "admin");
        assert_eq!(json["persistence_enabled"], true);

        let back: AuthState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
