//! # Query engine
//!
//! Read-only role and permission predicates over an [`AuthState`].
//!
//! Compound queries take a `|`-separated list of names:
//!
//! ```text
//! has_any_role("admin|editor")        - at least one role held
//! has_all_permissions("a.read|a.write") - every permission granted
//! ```
//!
//! Splitting is literal with no escaping. An empty name is never granted to
//! a regular user, so `has_any_role("")` and `has_all_roles("")` are false.
//! A user holding the configured super role passes every `has*` check and
//! fails every `unless*` check.

use crate::state::AuthState;
use crate::wildcard;

/// Separator for compound role and permission lists.
pub const LIST_SEPARATOR: char = '|';

/// Role and permission predicates.
///
/// Implementors only provide access to their [`AuthState`]; every predicate
/// is derived from it and never fails.
pub trait Query {
    /// The state the predicates are evaluated against.
    fn auth_state(&self) -> &AuthState;

    /// Check if the user holds the configured super role.
    ///
    /// A blank super role counts as unset.
    fn is_super_user(&self) -> bool {
        let state = self.auth_state();
        state
            .super_role()
            .filter(|super_role| !super_role.trim().is_empty())
            .is_some_and(|super_role| state.contains_role(super_role))
    }

    /// Check if the user holds `role`.
    fn has_role(&self, role: &str) -> bool {
        self.is_super_user() || (!role.is_empty() && self.auth_state().contains_role(role))
    }

    /// Negation of [`has_role`](Query::has_role).
    fn unless_role(&self, role: &str) -> bool {
        !self.has_role(role)
    }

    /// Check if the user holds at least one of the `|`-separated roles.
    fn has_any_role(&self, values: &str) -> bool {
        if self.is_super_user() {
            return true;
        }
        split_values(values).any(|role| self.has_role(role))
    }

    /// Check if the user holds every one of the `|`-separated roles.
    fn has_all_roles(&self, values: &str) -> bool {
        if self.is_super_user() {
            return true;
        }
        split_values(values).all(|role| self.has_role(role))
    }

    /// Check if any held permission pattern grants `permission`.
    ///
    /// Held permissions are treated as patterns and `permission` as the
    /// candidate; see [`wildcard::matches`].
    fn has_permission(&self, permission: &str) -> bool {
        if self.is_super_user() {
            return true;
        }
        !permission.is_empty()
            && self
                .auth_state()
                .permissions()
                .iter()
                .any(|pattern| wildcard::matches(permission, pattern))
    }

    /// Negation of [`has_permission`](Query::has_permission).
    fn unless_permission(&self, permission: &str) -> bool {
        !self.has_permission(permission)
    }

    /// Check if at least one of the `|`-separated permissions is granted.
    fn has_any_permission(&self, values: &str) -> bool {
        if self.is_super_user() {
            return true;
        }
        split_values(values).any(|permission| self.has_permission(permission))
    }

    /// Check if every one of the `|`-separated permissions is granted.
    fn has_all_permissions(&self, values: &str) -> bool {
        if self.is_super_user() {
            return true;
        }
        split_values(values).all(|permission| self.has_permission(permission))
    }

    /// Check if the user holds `role` or is granted `permission`.
    fn has_role_or_permission(&self, role: &str, permission: &str) -> bool {
        self.has_role(role) || self.has_permission(permission)
    }
}

impl Query for AuthState {
    fn auth_state(&self) -> &AuthState {
        self
    }
}

/// Split a compound list. `""` yields a single empty name.
pub fn split_values(values: &str) -> impl Iterator<Item = &str> {
    values.split(LIST_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editor_state() -> AuthState {
        AuthState::new(Some("admin".to_string()), false)
            .with_roles(["editor"])
            .with_permissions(["posts.*"])
    }

    fn super_state() -> AuthState {
        AuthState::new(Some("admin".to_string()), false).with_roles(["admin"])
    }

    #[test]
    fn test_editor_scenario() {
        let state = editor_state();
        assert!(state.has_role("editor"));
        assert!(!state.has_role("admin"));
        assert!(state.has_permission("posts.delete"));
        assert!(!state.has_permission("users.delete"));
        assert!(!state.is_super_user());
    }

    #[test]
    fn test_super_user_bypass() {
        let state = super_state();
        assert!(state.is_super_user());
        assert!(state.has_role("anything"));
        assert!(state.has_permission("users.delete"));
        assert!(!state.unless_role("anything"));
        assert!(!state.unless_permission("users.delete"));
        assert!(state.has_any_role("x|y"));
        assert!(state.has_all_roles("x|y"));
        assert!(state.has_any_permission("a.b|c.d"));
        assert!(state.has_all_permissions("a.b|c.d"));
        assert!(state.has_role(""));
        assert!(state.has_all_permissions(""));
    }

    #[test]
    fn test_super_role_unset_never_bypasses() {
        let state = AuthState::default().with_roles(["admin"]);
        assert!(!state.is_super_user());
        assert!(!state.has_role("editor"));
    }

    #[test]
    fn test_blank_super_role_never_bypasses() {
        for blank in ["", "  "] {
            let state = AuthState::new(Some(blank.to_string()), false).with_roles([blank]);
            assert!(!state.is_super_user());
            assert!(!state.has_role("admin"));
            assert!(!state.has_permission("users.delete"));
            assert!(state.unless_permission("users.delete"));
        }
    }

    #[test]
    fn test_super_role_configured_but_not_held() {
        let state = AuthState::new(Some("root".to_string()), false).with_roles(["admin"]);
        assert!(!state.is_super_user());
        assert!(!state.has_permission("users.delete"));
    }

    #[test]
    fn test_unless_is_negation() {
        let state = editor_state();
        for role in ["editor", "admin", "viewer", ""] {
            assert_eq!(state.unless_role(role), !state.has_role(role));
        }
        for permission in ["posts.create", "users.create", "posts", ""] {
            assert_eq!(
                state.unless_permission(permission),
                !state.has_permission(permission)
            );
        }
    }

    #[test]
    fn test_any_and_all_roles() {
        let state = AuthState::default().with_roles(["a", "b"]);

        assert!(state.has_any_role("a|x|y"));
        assert!(state.has_any_role("x|b"));
        assert!(!state.has_any_role("x|y|z"));

        assert!(state.has_all_roles("a|b"));
        assert!(state.has_all_roles("b"));
        assert!(!state.has_all_roles("a|b|c"));
    }

    #[test]
    fn test_any_and_all_permissions() {
        let state = AuthState::default().with_permissions(["posts.*", "users.read"]);

        assert!(state.has_any_permission("users.delete|posts.create"));
        assert!(!state.has_any_permission("users.delete|billing.read"));

        assert!(state.has_all_permissions("posts.create|users.read"));
        assert!(!state.has_all_permissions("posts.create|users.delete"));
    }

    #[test]
    fn test_empty_values() {
        let state = AuthState::default()
            .with_roles(["", "editor"])
            .with_permissions(["", "posts.*"]);

        assert!(!state.has_role(""));
        assert!(state.unless_role(""));
        assert!(!state.has_any_role(""));
        assert!(!state.has_all_roles(""));
        assert!(!state.has_permission(""));
        assert!(!state.has_any_permission(""));
        assert!(!state.has_all_permissions(""));

        // A trailing separator adds an empty name
        assert!(state.has_any_role("editor|"));
        assert!(!state.has_all_roles("editor|"));
    }

    #[test]
    fn test_role_or_permission() {
        let state = editor_state();
        assert!(state.has_role_or_permission("editor", "users.delete"));
        assert!(state.has_role_or_permission("viewer", "posts.edit"));
        assert!(!state.has_role_or_permission("viewer", "users.delete"));
        assert!(!state.has_role_or_permission("viewer", ""));
    }

    #[test]
    fn test_roles_are_exact() {
        let state = AuthState::default().with_roles(["admin"]);
        assert!(!state.has_role("Admin"));
        assert!(!state.has_role("admin "));
        assert!(!state.has_role("*"));
    }

    #[test]
    fn test_split_values() {
        assert_eq!(split_values("a|b|c").collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(split_values("").collect::<Vec<_>>(), [""]);
        assert_eq!(split_values("a\\|b").collect::<Vec<_>>(), ["a\\", "b"]);
    }
}
